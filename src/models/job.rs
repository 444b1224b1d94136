//! Scheduling models: jobs, job comments, job tasks, and job attachments.

use serde::{Deserialize, Serialize};

use crate::client::query::{QueryParams, Scalar};

/// Fields accepted when creating or updating a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobWritable {
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Job description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Assigned user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<i64>,
    /// Related client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    /// Related ticket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    /// Scheduled date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Job status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

/// A job as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobReadOnly {
    /// Job ID
    pub id: i64,
    /// Job title
    pub title: String,
    /// Job description
    #[serde(default)]
    pub description: Option<String>,
    /// Assigned user
    #[serde(default)]
    pub assigned_user_id: Option<i64>,
    /// Assigned user's first name
    #[serde(default)]
    pub assigned_user_first_name: Option<String>,
    /// Assigned user's last name
    #[serde(default)]
    pub assigned_user_last_name: Option<String>,
    /// Related client
    #[serde(default)]
    pub client_id: Option<i64>,
    /// Related client's first name
    #[serde(default)]
    pub client_first_name: Option<String>,
    /// Related client's last name
    #[serde(default)]
    pub client_last_name: Option<String>,
    /// Related ticket
    #[serde(default)]
    pub ticket_id: Option<i64>,
    /// Scheduled date (ISO 8601)
    #[serde(default)]
    pub date: Option<String>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<i32>,
    /// Job status
    #[serde(default)]
    pub status: i32,
}

/// Client filter for the job list endpoint: a specific client, or jobs
/// with no client at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobClientFilter {
    /// Jobs for one client
    Id(i64),
    /// Jobs with no related client
    Unassigned,
}

impl From<JobClientFilter> for Scalar {
    fn from(filter: JobClientFilter) -> Self {
        match filter {
            JobClientFilter::Id(id) => Scalar::Int(id),
            // the API uses the literal string "null" for unassigned jobs
            JobClientFilter::Unassigned => Scalar::Str("null".to_string()),
        }
    }
}

/// Filters for the job list endpoint.
#[derive(Debug, Clone, Default)]
pub struct JobSearchParams {
    /// Filter by client, or by having no client
    pub client_id: Option<JobClientFilter>,
    /// Filter by assigned user
    pub assigned_user_id: Option<i64>,
    /// Filter by related ticket
    pub ticket_id: Option<i64>,
    /// Jobs scheduled on or after this date (ISO 8601)
    pub date_from: Option<String>,
    /// Jobs scheduled on or before this date (ISO 8601)
    pub date_to: Option<String>,
    /// Filter by statuses (any match)
    pub statuses: Option<Vec<i32>>,
    /// Full-text query
    pub query: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
}

impl JobSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("clientId", self.client_id.map(Scalar::from));
        q.push_opt("assignedUserId", self.assigned_user_id);
        q.push_opt("ticketId", self.ticket_id);
        q.push_opt("dateFrom", self.date_from.clone());
        q.push_opt("dateTo", self.date_to.clone());
        q.push_opt("statuses", self.statuses.clone());
        q.push_opt("query", self.query.clone());
        q.push_opt("limit", self.limit);
        q.push_opt("offset", self.offset);
        q
    }
}

/// Fields accepted when creating or updating a job comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCommentWritable {
    /// Job the comment belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    /// Comment text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A job comment as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCommentReadOnly {
    /// Comment ID
    pub id: i64,
    /// Job the comment belongs to
    pub job_id: i64,
    /// Authoring user
    pub user_id: i64,
    /// Authoring user's first name
    #[serde(default)]
    pub user_first_name: Option<String>,
    /// Authoring user's last name
    #[serde(default)]
    pub user_last_name: Option<String>,
    /// Comment text
    pub message: String,
    /// Creation date (ISO 8601)
    #[serde(default)]
    pub created_date: Option<String>,
}

/// Filters for the job comment list endpoint.
#[derive(Debug, Clone, Default)]
pub struct JobCommentSearchParams {
    /// Filter by job
    pub job_id: Option<i64>,
    /// Filter by authoring user
    pub user_id: Option<i64>,
    /// Comments created on or after this date (ISO 8601)
    pub created_date_from: Option<String>,
    /// Comments created on or before this date (ISO 8601)
    pub created_date_to: Option<String>,
}

impl JobCommentSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("jobId", self.job_id);
        q.push_opt("userId", self.user_id);
        q.push_opt("createdDateFrom", self.created_date_from.clone());
        q.push_opt("createdDateTo", self.created_date_to.clone());
        q
    }
}

/// Fields accepted when creating or updating a job task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTaskWritable {
    /// Job the task belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    /// Task label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the task is done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
}

/// A job task as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTaskReadOnly {
    /// Task ID
    pub id: i64,
    /// Job the task belongs to
    pub job_id: i64,
    /// Task label
    pub label: String,
    /// Whether the task is done
    #[serde(default)]
    pub closed: bool,
}

/// Fields accepted when creating or updating a job attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAttachmentWritable {
    /// Job the attachment belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    /// File name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// File content (base64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    /// MIME content type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// A job attachment as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAttachmentReadOnly {
    /// Attachment ID
    pub id: i64,
    /// Job the attachment belongs to
    pub job_id: i64,
    /// File name
    pub filename: String,
    /// File size in bytes
    #[serde(default)]
    pub size: i64,
    /// MIME content type
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Filters for the job attachment list endpoint.
#[derive(Debug, Clone, Default)]
pub struct JobAttachmentSearchParams {
    /// Filter by job
    pub job_id: Option<i64>,
}

impl JobAttachmentSearchParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("jobId", self.job_id);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_client_filter_encodes_as_null_string() {
        let params = JobSearchParams {
            client_id: Some(JobClientFilter::Unassigned),
            ..Default::default()
        };
        assert_eq!(params.to_query().to_query_string(), "?clientId=null");
    }

    #[test]
    fn client_filter_by_id_encodes_the_id() {
        let params = JobSearchParams {
            client_id: Some(JobClientFilter::Id(31)),
            statuses: Some(vec![0, 1]),
            ..Default::default()
        };
        let qs = params.to_query().to_query_string();
        assert!(qs.contains("clientId=31"));
        assert!(qs.contains("statuses[]=0&statuses[]=1"));
    }
}
