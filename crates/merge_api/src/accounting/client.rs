use super::types::{
    Account, Address, Attachment, CompanyInfo, Contact, Expense, Invoice, Item, JournalEntry,
    Payment, PurchaseOrder, TaxRate, TrackingCategory,
};

category_client! {
    /// Accounting: ledger accounts, invoices, payments and journal entries.
    pub struct AccountingClient => "accounting/v1" {
        accounts: Account => "accounts",
        /// Addresses can only be retrieved by id.
        addresses: Address => "addresses",
        attachments: Attachment => "attachments",
        company_info: CompanyInfo => "company-info",
        contacts: Contact => "contacts",
        expenses: Expense => "expenses",
        invoices: Invoice => "invoices",
        items: Item => "items",
        journal_entries: JournalEntry => "journal-entries",
        payments: Payment => "payments",
        purchase_orders: PurchaseOrder => "purchase-orders",
        tax_rates: TaxRate => "tax-rates",
        tracking_categories: TrackingCategory => "tracking-categories",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::accounting::{InvoiceRequest, InvoiceStatus};
    use crate::http::{HttpMethod, MockTransport};
    use crate::model::{Model, WriteRequest};
    use crate::params::{RetrieveParams, WriteParams};
    use crate::request::RequestClient;
    use crate::retry::RetryConfig;

    const BASE: &str = "https://api.test/api";

    fn request_client(transport: &MockTransport) -> RequestClient {
        RequestClient::new(BASE, "key", Arc::new(transport.clone()))
            .unwrap()
            .with_retry(RetryConfig::disabled())
    }

    #[test]
    fn resource_paths() {
        let transport = MockTransport::new();
        let client = request_client(&transport);
        let accounting = AccountingClient::new(&client);

        assert_eq!(accounting.company_info().path(), "accounting/v1/company-info");
        assert_eq!(accounting.journal_entries().path(), "accounting/v1/journal-entries");
        assert_eq!(accounting.tracking_categories().path(), "accounting/v1/tracking-categories");
        assert_eq!(accounting.integration().prefix(), "accounting/v1");
    }

    #[tokio::test]
    async fn retrieve_address() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/accounting/v1/addresses/ad-1"),
            200,
            json!({ "type": "BILLING", "city": "San Francisco", "country": "US" }),
        );
        let client = request_client(&transport);

        let address = AccountingClient::new(&client)
            .addresses()
            .retrieve("ad-1", &RetrieveParams::new(), None)
            .await
            .unwrap();

        assert_eq!(address.city.as_deref(), Some("San Francisco"));
        assert_eq!(address.id(), None);
    }

    #[tokio::test]
    async fn patch_invoice_and_fetch_meta() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Patch,
            format!("{BASE}/accounting/v1/invoices/inv-1"),
            200,
            json!({ "model": { "id": "inv-1", "status": "VOID" }, "warnings": [{
                "title": "Unmapped field",
                "detail": "memo was ignored",
                "problem_type": "UNMAPPED_FIELD"
            }] }),
        );
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/accounting/v1/invoices/meta/patch/inv-1"),
            200,
            json!({
                "request_schema": {},
                "status": { "linked_account_status": "COMPLETE", "can_make_request": true },
                "has_conditional_params": true,
                "has_required_linked_account_params": false
            }),
        );
        let client = request_client(&transport);
        let invoices = AccountingClient::new(&client).invoices();

        let response = invoices
            .partial_update(
                "inv-1",
                &WriteRequest::new(InvoiceRequest {
                    status: Some(InvoiceStatus::Void),
                    ..Default::default()
                }),
                &WriteParams::new(),
                None,
            )
            .await
            .unwrap();
        assert_eq!(response.model.status, Some(InvoiceStatus::Void));
        assert_eq!(response.warnings[0].problem_type, "UNMAPPED_FIELD");

        let meta = invoices.meta_patch("inv-1", None).await.unwrap();
        assert!(meta.status.unwrap().can_make_request);
    }
}
