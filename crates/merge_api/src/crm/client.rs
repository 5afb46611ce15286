use super::types::{
    Account, Contact, Engagement, EngagementType, Lead, Note, Opportunity, Stage, Task, User,
};

category_client! {
    /// Customer relationship management: accounts, contacts and the sales pipeline.
    pub struct CrmClient => "crm/v1" {
        accounts: Account => "accounts",
        contacts: Contact => "contacts",
        engagement_types: EngagementType => "engagement-types",
        engagements: Engagement => "engagements",
        leads: Lead => "leads",
        notes: Note => "notes",
        opportunities: Opportunity => "opportunities",
        stages: Stage => "stages",
        tasks: Task => "tasks",
        users: User => "users",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::crm::{OpportunityRequest, OpportunityStatus};
    use crate::http::{HttpMethod, MockTransport};
    use crate::model::WriteRequest;
    use crate::params::{ListParams, WriteParams};
    use crate::request::{RequestClient, RequestOptions};
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
        let crm = CrmClient::new(&client);

        assert_eq!(crm.engagement_types().path(), "crm/v1/engagement-types");
        assert_eq!(crm.opportunities().path(), "crm/v1/opportunities");
        assert_eq!(crm.users().path(), "crm/v1/users");
    }

    #[tokio::test]
    async fn close_opportunity_for_another_account() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Patch,
            format!("{BASE}/crm/v1/opportunities/op-1"),
            200,
            json!({ "model": { "id": "op-1", "status": "WON" } }),
        );
        let client = request_client(&transport);

        let body = WriteRequest::new(OpportunityRequest {
            status: Some(OpportunityStatus::Won),
            ..Default::default()
        });
        let options = RequestOptions::new().account_token("other-account");
        let updated = CrmClient::new(&client)
            .opportunities()
            .partial_update("op-1", &body, &WriteParams::new(), Some(&options))
            .await
            .unwrap();

        assert_eq!(updated.model.status, Some(OpportunityStatus::Won));
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("x-account-token"), Some("other-account"));
        assert_eq!(sent.body, br#"{"model":{"status":"WON"}}"#.to_vec());
    }

    #[tokio::test]
    async fn list_contacts_by_account() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/crm/v1/contacts"),
            200,
            json!({ "next": null, "previous": null, "results": null }),
        );
        let client = request_client(&transport);

        let page = CrmClient::new(&client)
            .contacts()
            .list(&ListParams::new().filter("account_id", "acc-1"), None)
            .await
            .unwrap();

        assert!(page.is_empty());
        assert_eq!(
            transport.last_request().unwrap().url,
            format!("{BASE}/crm/v1/contacts?account_id=acc-1")
        );
    }
}
