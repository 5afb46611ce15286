//! Accounting common models.
//!
//! Monetary amounts are `f64` as returned by the API; `currency` fields hold
//! ISO 4217 codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Expandable, RemoteField, Updatable, Writable, nullable_vec};

// ---------- Enums ----------

string_enum! {
    pub enum Classification {
        Asset => "ASSET",
        Equity => "EQUITY",
        Expense => "EXPENSE",
        Liability => "LIABILITY",
        Revenue => "REVENUE",
    }
}

string_enum! {
    pub enum AccountStatus {
        Active => "ACTIVE",
        Pending => "PENDING",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    pub enum AddressType {
        Billing => "BILLING",
        Shipping => "SHIPPING",
    }
}

string_enum! {
    /// Shared by contacts, items and tracking categories.
    pub enum ActiveStatus {
        Active => "ACTIVE",
        Archived => "ARCHIVED",
    }
}

string_enum! {
    pub enum InvoiceType {
        AccountsReceivable => "ACCOUNTS_RECEIVABLE",
        AccountsPayable => "ACCOUNTS_PAYABLE",
    }
}

string_enum! {
    pub enum InvoiceStatus {
        Paid => "PAID",
        Draft => "DRAFT",
        Submitted => "SUBMITTED",
        PartiallyPaid => "PARTIALLY_PAID",
        Open => "OPEN",
        Void => "VOID",
    }
}

string_enum! {
    pub enum PostingStatus {
        Unposted => "UNPOSTED",
        Posted => "POSTED",
    }
}

string_enum! {
    pub enum PaymentType {
        AccountsPayable => "ACCOUNTS_PAYABLE",
        AccountsReceivable => "ACCOUNTS_RECEIVABLE",
    }
}

string_enum! {
    pub enum PurchaseOrderStatus {
        Draft => "DRAFT",
        Submitted => "SUBMITTED",
        Authorized => "AUTHORIZED",
        Billed => "BILLED",
        Deleted => "DELETED",
    }
}

string_enum! {
    pub enum CategoryType {
        Class => "CLASS",
        Department => "DEPARTMENT",
    }
}

// ---------- Expand relations ----------

string_enum! {
    pub enum CompanyInfoExpand {
        Addresses => "addresses",
        PhoneNumbers => "phone_numbers",
    }
}

string_enum! {
    pub enum ContactExpand {
        Addresses => "addresses",
        PhoneNumbers => "phone_numbers",
    }
}

string_enum! {
    pub enum ExpenseExpand {
        Account => "account",
        Contact => "contact",
        TrackingCategories => "tracking_categories",
    }
}

string_enum! {
    pub enum InvoiceExpand {
        Contact => "contact",
        LineItems => "line_items",
        Payments => "payments",
        PurchaseOrders => "purchase_orders",
        TrackingCategories => "tracking_categories",
    }
}

string_enum! {
    pub enum ItemExpand {
        PurchaseAccount => "purchase_account",
        SalesAccount => "sales_account",
    }
}

string_enum! {
    pub enum JournalEntryExpand {
        Lines => "lines",
        Payments => "payments",
        TrackingCategories => "tracking_categories",
    }
}

string_enum! {
    pub enum PaymentExpand {
        Account => "account",
        Contact => "contact",
    }
}

string_enum! {
    pub enum PurchaseOrderExpand {
        DeliveryAddress => "delivery_address",
        LineItems => "line_items",
        TrackingCategories => "tracking_categories",
        Vendor => "vendor",
    }
}

// ---------- Nested values ----------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub phone_type: Option<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub item: Option<Expandable<Item>>,
    pub net_amount: Option<f64>,
    pub tracking_category: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tracking_categories: Vec<String>,
    pub company: Option<String>,
    pub account: Option<Expandable<Account>>,
    pub contact: Option<Expandable<Contact>>,
    pub description: Option<String>,
    pub exchange_rate: Option<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    pub exchange_rate: Option<String>,
    pub item: Option<Expandable<Item>>,
    pub account: Option<Expandable<Account>>,
    pub tracking_category: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tracking_categories: Vec<String>,
    pub company: Option<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub account: Option<Expandable<Account>>,
    /// Positive for debits, negative for credits.
    pub net_amount: Option<f64>,
    pub tracking_category: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tracking_categories: Vec<String>,
    pub contact: Option<Expandable<Contact>>,
    pub description: Option<String>,
    pub exchange_rate: Option<String>,
    pub company: Option<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLineItem {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub item: Option<Expandable<Item>>,
    pub account: Option<Expandable<Account>>,
    pub tracking_category: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tracking_categories: Vec<String>,
    pub tax_amount: Option<String>,
    pub total_line_amount: Option<String>,
    pub currency: Option<String>,
    pub exchange_rate: Option<String>,
    pub company: Option<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

// ---------- Models ----------

common_model! {
    /// A ledger account in the chart of accounts.
    pub struct Account {
        pub name: Option<String>,
        pub description: Option<String>,
        pub classification: Option<Classification>,
        #[serde(rename = "type")]
        pub account_type: Option<String>,
        pub status: Option<AccountStatus>,
        pub current_balance: Option<f64>,
        pub currency: Option<String>,
        pub account_number: Option<String>,
        pub parent_account: Option<String>,
        pub company: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    pub struct Address {
        #[serde(rename = "type")]
        pub address_type: Option<AddressType>,
        pub street_1: Option<String>,
        pub street_2: Option<String>,
        pub city: Option<String>,
        pub state: Option<String>,
        pub country_subdivision: Option<String>,
        pub country: Option<String>,
        pub zip_code: Option<String>,
    }
}

common_model! {
    pub struct Attachment {
        pub file_name: Option<String>,
        pub file_url: Option<String>,
        pub company: Option<String>,
    }
}

common_model! {
    /// Details of the company whose books are linked.
    pub struct CompanyInfo {
        pub name: Option<String>,
        pub legal_name: Option<String>,
        pub tax_number: Option<String>,
        pub fiscal_year_end_month: Option<u8>,
        pub fiscal_year_end_day: Option<u8>,
        pub currency: Option<String>,
        pub remote_created_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub urls: Vec<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub addresses: Vec<Address>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub phone_numbers: Vec<PhoneNumber>,
    }
}

common_model! {
    /// A customer or supplier.
    pub struct Contact {
        pub name: Option<String>,
        pub is_supplier: Option<bool>,
        pub is_customer: Option<bool>,
        pub email_address: Option<String>,
        pub tax_number: Option<String>,
        pub status: Option<ActiveStatus>,
        pub currency: Option<String>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        pub company: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub addresses: Vec<Expandable<Address>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub phone_numbers: Vec<PhoneNumber>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    pub struct Expense {
        pub transaction_date: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub account: Option<Expandable<Account>>,
        pub contact: Option<Expandable<Contact>>,
        pub total_amount: Option<f64>,
        pub sub_total: Option<f64>,
        pub total_tax_amount: Option<f64>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub company: Option<String>,
        pub memo: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub lines: Vec<ExpenseLine>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub tracking_categories: Vec<Expandable<TrackingCategory>>,
    }
}

common_model! {
    /// A bill (payable) or invoice (receivable).
    pub struct Invoice {
        #[serde(rename = "type")]
        pub invoice_type: Option<InvoiceType>,
        pub contact: Option<Expandable<Contact>>,
        pub number: Option<String>,
        pub issue_date: Option<DateTime<Utc>>,
        pub due_date: Option<DateTime<Utc>>,
        pub paid_on_date: Option<DateTime<Utc>>,
        pub memo: Option<String>,
        pub company: Option<String>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub total_discount: Option<f64>,
        pub sub_total: Option<f64>,
        pub total_tax_amount: Option<f64>,
        pub total_amount: Option<f64>,
        pub balance: Option<f64>,
        pub status: Option<InvoiceStatus>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub payments: Vec<Expandable<Payment>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub line_items: Vec<InvoiceLineItem>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub tracking_categories: Vec<Expandable<TrackingCategory>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub purchase_orders: Vec<Expandable<PurchaseOrder>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    pub struct Item {
        pub name: Option<String>,
        pub status: Option<ActiveStatus>,
        pub unit_price: Option<f64>,
        pub purchase_price: Option<f64>,
        pub purchase_account: Option<Expandable<Account>>,
        pub sales_account: Option<Expandable<Account>>,
        pub company: Option<String>,
        pub remote_updated_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct JournalEntry {
        pub transaction_date: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub payments: Vec<Expandable<Payment>>,
        pub memo: Option<String>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub company: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub lines: Vec<JournalLine>,
        pub journal_number: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub tracking_categories: Vec<Expandable<TrackingCategory>>,
        pub posting_status: Option<PostingStatus>,
    }
}

common_model! {
    pub struct Payment {
        pub transaction_date: Option<DateTime<Utc>>,
        pub contact: Option<Expandable<Contact>>,
        pub account: Option<Expandable<Account>>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub company: Option<String>,
        pub total_amount: Option<f64>,
        #[serde(rename = "type")]
        pub payment_type: Option<PaymentType>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub tracking_categories: Vec<Expandable<TrackingCategory>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct PurchaseOrder {
        pub status: Option<PurchaseOrderStatus>,
        pub issue_date: Option<DateTime<Utc>>,
        pub delivery_date: Option<DateTime<Utc>>,
        pub delivery_address: Option<Expandable<Address>>,
        pub customer: Option<String>,
        pub vendor: Option<Expandable<Contact>>,
        pub memo: Option<String>,
        pub company: Option<String>,
        pub total_amount: Option<f64>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub line_items: Vec<PurchaseOrderLineItem>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub tracking_categories: Vec<Expandable<TrackingCategory>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct TaxRate {
        pub description: Option<String>,
        pub total_tax_rate: Option<f64>,
        pub effective_tax_rate: Option<f64>,
        pub company: Option<String>,
    }
}

common_model! {
    /// A class or department used to tag transactions.
    pub struct TrackingCategory {
        pub name: Option<String>,
        pub status: Option<ActiveStatus>,
        pub category_type: Option<CategoryType>,
        pub parent_category: Option<String>,
        pub company: Option<String>,
    }
}

impl_model!(
    Account,
    Attachment,
    CompanyInfo,
    Contact,
    Expense,
    Invoice,
    Item,
    JournalEntry,
    Payment,
    PurchaseOrder,
    TaxRate,
    TrackingCategory,
);

impl_model!(@retrieve_only Address);

// ---------- Write bodies ----------

request_model! {
    pub struct AccountRequest {
        pub name: Option<String>,
        pub description: Option<String>,
        pub classification: Option<Classification>,
        #[serde(rename = "type")]
        pub account_type: Option<String>,
        pub status: Option<AccountStatus>,
        pub current_balance: Option<f64>,
        pub currency: Option<String>,
        pub account_number: Option<String>,
        pub parent_account: Option<String>,
        pub company: Option<String>,
    }
}

request_model! {
    pub struct AttachmentRequest {
        pub file_name: Option<String>,
        pub file_url: Option<String>,
        pub company: Option<String>,
    }
}

request_model! {
    pub struct ContactRequest {
        pub name: Option<String>,
        pub is_supplier: Option<bool>,
        pub is_customer: Option<bool>,
        pub email_address: Option<String>,
        pub tax_number: Option<String>,
        pub status: Option<ActiveStatus>,
        pub currency: Option<String>,
        pub company: Option<String>,
        pub addresses: Option<Vec<String>>,
        pub phone_numbers: Option<Vec<PhoneNumber>>,
    }
}

request_model! {
    pub struct ExpenseLineRequest {
        pub item: Option<String>,
        pub net_amount: Option<f64>,
        pub tracking_categories: Option<Vec<String>>,
        pub company: Option<String>,
        pub account: Option<String>,
        pub contact: Option<String>,
        pub description: Option<String>,
        pub exchange_rate: Option<String>,
    }
}

request_model! {
    pub struct ExpenseRequest {
        pub transaction_date: Option<DateTime<Utc>>,
        pub account: Option<String>,
        pub contact: Option<String>,
        pub total_amount: Option<f64>,
        pub sub_total: Option<f64>,
        pub total_tax_amount: Option<f64>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub company: Option<String>,
        pub memo: Option<String>,
        pub lines: Option<Vec<ExpenseLineRequest>>,
        pub tracking_categories: Option<Vec<String>>,
    }
}

request_model! {
    pub struct InvoiceLineItemRequest {
        pub description: Option<String>,
        pub unit_price: Option<f64>,
        pub quantity: Option<f64>,
        pub total_amount: Option<f64>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub item: Option<String>,
        pub account: Option<String>,
        pub tracking_categories: Option<Vec<String>>,
        pub company: Option<String>,
    }
}

request_model! {
    pub struct InvoiceRequest {
        #[serde(rename = "type")]
        pub invoice_type: Option<InvoiceType>,
        pub contact: Option<String>,
        pub number: Option<String>,
        pub issue_date: Option<DateTime<Utc>>,
        pub due_date: Option<DateTime<Utc>>,
        pub paid_on_date: Option<DateTime<Utc>>,
        pub memo: Option<String>,
        pub status: Option<InvoiceStatus>,
        pub company: Option<String>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub total_discount: Option<f64>,
        pub sub_total: Option<f64>,
        pub total_tax_amount: Option<f64>,
        pub total_amount: Option<f64>,
        pub balance: Option<f64>,
        pub payments: Option<Vec<String>>,
        pub tracking_categories: Option<Vec<String>>,
        pub line_items: Option<Vec<InvoiceLineItemRequest>>,
        pub purchase_orders: Option<Vec<String>>,
    }
}

request_model! {
    pub struct JournalLineRequest {
        pub account: Option<String>,
        pub net_amount: Option<f64>,
        pub tracking_categories: Option<Vec<String>>,
        pub contact: Option<String>,
        pub description: Option<String>,
        pub exchange_rate: Option<String>,
        pub company: Option<String>,
    }
}

request_model! {
    pub struct JournalEntryRequest {
        pub transaction_date: Option<DateTime<Utc>>,
        pub payments: Option<Vec<String>>,
        pub memo: Option<String>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub company: Option<String>,
        pub tracking_categories: Option<Vec<String>>,
        pub lines: Option<Vec<JournalLineRequest>>,
        pub journal_number: Option<String>,
        pub posting_status: Option<PostingStatus>,
    }
}

request_model! {
    pub struct PaymentRequest {
        pub transaction_date: Option<DateTime<Utc>>,
        pub contact: Option<String>,
        pub account: Option<String>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub company: Option<String>,
        pub total_amount: Option<f64>,
        #[serde(rename = "type")]
        pub payment_type: Option<PaymentType>,
        pub tracking_categories: Option<Vec<String>>,
    }
}

request_model! {
    pub struct PurchaseOrderLineItemRequest {
        pub description: Option<String>,
        pub unit_price: Option<f64>,
        pub quantity: Option<f64>,
        pub item: Option<String>,
        pub account: Option<String>,
        pub tracking_categories: Option<Vec<String>>,
        pub tax_amount: Option<String>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub company: Option<String>,
    }
}

request_model! {
    pub struct PurchaseOrderRequest {
        pub status: Option<PurchaseOrderStatus>,
        pub issue_date: Option<DateTime<Utc>>,
        pub delivery_date: Option<DateTime<Utc>>,
        pub delivery_address: Option<String>,
        pub customer: Option<String>,
        pub vendor: Option<String>,
        pub memo: Option<String>,
        pub company: Option<String>,
        pub total_amount: Option<f64>,
        pub currency: Option<String>,
        pub exchange_rate: Option<String>,
        pub tracking_categories: Option<Vec<String>>,
        pub line_items: Option<Vec<PurchaseOrderLineItemRequest>>,
    }
}

impl Writable for Account {
    type Request = AccountRequest;
}

impl Writable for Attachment {
    type Request = AttachmentRequest;
}

impl Writable for Contact {
    type Request = ContactRequest;
}

impl Writable for Expense {
    type Request = ExpenseRequest;
}

impl Writable for Invoice {
    type Request = InvoiceRequest;
}

impl Updatable for Invoice {}

impl Writable for JournalEntry {
    type Request = JournalEntryRequest;
}

impl Writable for Payment {
    type Request = PaymentRequest;
}

impl Writable for PurchaseOrder {
    type Request = PurchaseOrderRequest;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn invoice_with_line_items() {
        let invoice: Invoice = serde_json::from_value(serde_json::json!({
            "id": "inv-1",
            "type": "ACCOUNTS_RECEIVABLE",
            "contact": "ct-1",
            "total_amount": 260.0,
            "status": "PARTIALLY_PAID",
            "line_items": [
                { "remote_id": "8765432", "unit_price": 130.0, "quantity": 2.0, "item": "it-1" }
            ],
            "payments": null,
            "accounting_period": "ap-1"
        }))
        .unwrap();

        assert_eq!(invoice.invoice_type, Some(InvoiceType::AccountsReceivable));
        assert_eq!(invoice.status, Some(InvoiceStatus::PartiallyPaid));
        assert_eq!(invoice.line_items[0].quantity, Some(2.0));
        assert_eq!(
            invoice.line_items[0].item.as_ref().and_then(|i| i.id()),
            Some("it-1")
        );
        assert!(invoice.payments.is_empty());
        assert_eq!(invoice.additional_properties()["accounting_period"], "ap-1");
    }

    #[test]
    fn journal_entry_request_nests_lines() {
        let request = JournalEntryRequest {
            memo: Some("Accrual".into()),
            lines: Some(vec![
                JournalLineRequest {
                    account: Some("acc-1".into()),
                    net_amount: Some(25.0),
                    ..Default::default()
                },
                JournalLineRequest {
                    account: Some("acc-2".into()),
                    net_amount: Some(-25.0),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "memo": "Accrual",
                "lines": [
                    { "account": "acc-1", "net_amount": 25.0 },
                    { "account": "acc-2", "net_amount": -25.0 }
                ]
            })
        );
    }

    #[test]
    fn account_type_field_renamed() {
        let account: Account =
            serde_json::from_str(r#"{"name":"Cash","type":"Bank","classification":"ASSET"}"#)
                .unwrap();
        assert_eq!(account.account_type.as_deref(), Some("Bank"));
        assert_eq!(account.classification, Some(Classification::Asset));
    }
}
