//! Accounting category (`accounting/v1`).

mod client;
mod types;

pub use client::AccountingClient;

pub use types::{
    Account, AccountRequest, AccountStatus, ActiveStatus, Address, AddressType, Attachment,
    AttachmentRequest, CategoryType, Classification, CompanyInfo, CompanyInfoExpand, Contact,
    ContactExpand, ContactRequest, Expense, ExpenseExpand, ExpenseLine, ExpenseLineRequest,
    ExpenseRequest, Invoice, InvoiceExpand, InvoiceLineItem, InvoiceLineItemRequest,
    InvoiceRequest, InvoiceStatus, InvoiceType, Item, ItemExpand, JournalEntry,
    JournalEntryExpand, JournalEntryRequest, JournalLine, JournalLineRequest, Payment,
    PaymentExpand, PaymentRequest, PaymentType, PhoneNumber, PostingStatus, PurchaseOrder,
    PurchaseOrderExpand, PurchaseOrderLineItem, PurchaseOrderLineItemRequest,
    PurchaseOrderRequest, PurchaseOrderStatus, TaxRate, TrackingCategory,
};
