use super::types::{Drive, File, Folder, Group, User};

category_client! {
    /// File storage: drives, folders and files.
    pub struct FileStorageClient => "filestorage/v1" {
        drives: Drive => "drives",
        /// File contents are fetched with `download`.
        files: File => "files",
        folders: Folder => "folders",
        groups: Group => "groups",
        users: User => "users",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::filestorage::{FileExpand, FolderRequest};
    use crate::http::{HttpMethod, HttpResponse, MockTransport};
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
        let storage = FileStorageClient::new(&client);

        assert_eq!(FileStorageClient::PREFIX, "filestorage/v1");
        assert_eq!(storage.files().path(), "filestorage/v1/files");
        assert_eq!(storage.drives().path(), "filestorage/v1/drives");
    }

    #[tokio::test]
    async fn list_files_in_folder() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/filestorage/v1/files"),
            200,
            json!({
                "next": "cD0x",
                "previous": null,
                "results": [{ "id": "f-1", "name": "a.txt", "drive": { "id": "d-1", "name": "Shared" } }]
            }),
        );
        let client = request_client(&transport);

        let params = ListParams::new()
            .filter("folder_id", "fo-1")
            .expand([FileExpand::Drive]);
        let page = FileStorageClient::new(&client)
            .files()
            .list(&params, None)
            .await
            .unwrap();

        assert_eq!(page.results[0].name.as_deref(), Some("a.txt"));
        assert!(page.results[0].drive.as_ref().unwrap().is_expanded());
        let next = page.next_page(&params).unwrap();
        assert_eq!(next.cursor.as_deref(), Some("cD0x"));
    }

    #[tokio::test]
    async fn download_uses_long_timeout_override() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            format!("{BASE}/filestorage/v1/files/f-1/download"),
            HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: b"hello".to_vec(),
            },
        );
        let client = request_client(&transport);

        let options = RequestOptions::new().timeout(std::time::Duration::from_secs(300));
        let bytes = FileStorageClient::new(&client)
            .files()
            .download("f-1", Some(&options))
            .await
            .unwrap();

        assert_eq!(bytes, b"hello".to_vec());
        assert_eq!(
            transport.last_request().unwrap().timeout,
            Some(std::time::Duration::from_secs(300))
        );
    }

    #[tokio::test]
    async fn create_folder() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/filestorage/v1/folders"),
            201,
            json!({ "model": { "id": "fo-2", "name": "Archive" } }),
        );
        let client = request_client(&transport);

        let response = FileStorageClient::new(&client)
            .folders()
            .create(
                &WriteRequest::new(FolderRequest {
                    name: Some("Archive".into()),
                    drive: Some("d-1".into()),
                    ..Default::default()
                }),
                &WriteParams::new(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(response.model.name.as_deref(), Some("Archive"));
    }
}
