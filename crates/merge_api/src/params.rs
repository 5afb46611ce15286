//! Query parameters for list, retrieve and write calls.

use chrono::{DateTime, SecondsFormat, Utc};

/// Query string as ordered key/value pairs.
pub type Query = Vec<(String, String)>;

fn push_opt(query: &mut Query, key: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}

fn push_time(query: &mut Query, key: &str, value: Option<DateTime<Utc>>) {
    push_opt(
        query,
        key,
        value.map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
    );
}

fn push_list(query: &mut Query, key: &str, values: &[String]) {
    if !values.is_empty() {
        query.push((key.to_string(), values.join(",")));
    }
}

fn collect<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values.into_iter().map(|v| v.as_ref().to_string()).collect()
}

/// Parameters accepted by every list endpoint.
///
/// ```ignore
/// let params = ListParams::new()
///     .page_size(50)
///     .expand([CandidateExpand::Applications])
///     .filter("email_addresses", "ada@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub modified_after: Option<DateTime<Utc>>,
    pub modified_before: Option<DateTime<Utc>>,
    pub include_deleted_data: Option<bool>,
    pub include_remote_data: Option<bool>,
    pub include_shell_data: Option<bool>,
    pub include_remote_fields: Option<bool>,
    pub expand: Vec<String>,
    pub remote_fields: Vec<String>,
    pub show_enum_origins: Vec<String>,
    pub remote_id: Option<String>,
    /// Resource-specific filters, sent verbatim.
    pub filters: Query,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn created_after(mut self, at: DateTime<Utc>) -> Self {
        self.created_after = Some(at);
        self
    }

    #[must_use]
    pub fn created_before(mut self, at: DateTime<Utc>) -> Self {
        self.created_before = Some(at);
        self
    }

    #[must_use]
    pub fn modified_after(mut self, at: DateTime<Utc>) -> Self {
        self.modified_after = Some(at);
        self
    }

    #[must_use]
    pub fn modified_before(mut self, at: DateTime<Utc>) -> Self {
        self.modified_before = Some(at);
        self
    }

    #[must_use]
    pub fn include_deleted_data(mut self, include: bool) -> Self {
        self.include_deleted_data = Some(include);
        self
    }

    #[must_use]
    pub fn include_remote_data(mut self, include: bool) -> Self {
        self.include_remote_data = Some(include);
        self
    }

    #[must_use]
    pub fn include_shell_data(mut self, include: bool) -> Self {
        self.include_shell_data = Some(include);
        self
    }

    #[must_use]
    pub fn include_remote_fields(mut self, include: bool) -> Self {
        self.include_remote_fields = Some(include);
        self
    }

    /// Relations to expand; accepts a resource's expand enum or plain strings.
    #[must_use]
    pub fn expand<I>(mut self, relations: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.expand = collect(relations);
        self
    }

    /// Enum fields to return with their original remote values.
    #[must_use]
    pub fn remote_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.remote_fields = collect(fields);
        self
    }

    /// Enum fields to return with the remote value instead of the normalized one.
    #[must_use]
    pub fn show_enum_origins<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.show_enum_origins = collect(fields);
        self
    }

    #[must_use]
    pub fn remote_id(mut self, remote_id: impl Into<String>) -> Self {
        self.remote_id = Some(remote_id.into());
        self
    }

    /// Add a resource-specific filter such as `status` or `account_id`.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }

    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        push_time(&mut query, "created_after", self.created_after);
        push_time(&mut query, "created_before", self.created_before);
        push_opt(&mut query, "cursor", self.cursor.as_deref());
        push_list(&mut query, "expand", &self.expand);
        push_opt(&mut query, "include_deleted_data", self.include_deleted_data);
        push_opt(&mut query, "include_remote_data", self.include_remote_data);
        push_opt(&mut query, "include_remote_fields", self.include_remote_fields);
        push_opt(&mut query, "include_shell_data", self.include_shell_data);
        push_time(&mut query, "modified_after", self.modified_after);
        push_time(&mut query, "modified_before", self.modified_before);
        push_opt(&mut query, "page_size", self.page_size);
        push_opt(&mut query, "remote_id", self.remote_id.as_deref());
        push_list(&mut query, "remote_fields", &self.remote_fields);
        push_list(&mut query, "show_enum_origins", &self.show_enum_origins);
        query.extend(self.filters.iter().cloned());
        query
    }
}

/// Parameters accepted by retrieve endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetrieveParams {
    pub expand: Vec<String>,
    pub include_remote_data: Option<bool>,
    pub include_shell_data: Option<bool>,
    pub include_remote_fields: Option<bool>,
    pub remote_fields: Vec<String>,
    pub show_enum_origins: Vec<String>,
}

impl RetrieveParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expand<I>(mut self, relations: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.expand = collect(relations);
        self
    }

    #[must_use]
    pub fn include_remote_data(mut self, include: bool) -> Self {
        self.include_remote_data = Some(include);
        self
    }

    #[must_use]
    pub fn include_shell_data(mut self, include: bool) -> Self {
        self.include_shell_data = Some(include);
        self
    }

    #[must_use]
    pub fn include_remote_fields(mut self, include: bool) -> Self {
        self.include_remote_fields = Some(include);
        self
    }

    #[must_use]
    pub fn remote_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.remote_fields = collect(fields);
        self
    }

    #[must_use]
    pub fn show_enum_origins<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.show_enum_origins = collect(fields);
        self
    }

    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        push_list(&mut query, "expand", &self.expand);
        push_opt(&mut query, "include_remote_data", self.include_remote_data);
        push_opt(&mut query, "include_remote_fields", self.include_remote_fields);
        push_opt(&mut query, "include_shell_data", self.include_shell_data);
        push_list(&mut query, "remote_fields", &self.remote_fields);
        push_list(&mut query, "show_enum_origins", &self.show_enum_origins);
        query
    }
}

/// Parameters accepted by create and update endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteParams {
    /// Attach request logs to the response.
    pub is_debug_mode: Option<bool>,
    /// Return immediately and perform the write in the background.
    pub run_async: Option<bool>,
}

impl WriteParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.is_debug_mode = Some(enabled);
        self
    }

    #[must_use]
    pub fn run_async(mut self, enabled: bool) -> Self {
        self.run_async = Some(enabled);
        self
    }

    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        push_opt(&mut query, "is_debug_mode", self.is_debug_mode);
        push_opt(&mut query, "run_async", self.run_async);
        query
    }
}
