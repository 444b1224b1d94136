//! Scheduling services: jobs, job comments, job tasks, and job
//! attachments.

use std::sync::Arc;

use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    JobAttachmentReadOnly, JobAttachmentSearchParams, JobAttachmentWritable, JobCommentReadOnly,
    JobCommentSearchParams, JobCommentWritable, JobReadOnly, JobSearchParams, JobTaskReadOnly,
    JobTaskWritable, JobWritable,
};
use crate::Result;

/// Service for scheduling job operations.
///
/// # Example
///
/// ```no_run
/// use uisp_crm_rs::models::JobWritable;
///
/// # async fn example(client: uisp_crm_rs::UispCrmClient) -> uisp_crm_rs::Result<()> {
/// let job = client.jobs().create(&JobWritable {
///     title: Some("Install antenna".to_string()),
///     client_id: Some(42),
///     date: Some("2024-03-01T09:00:00+0000".to_string()),
///     duration: Some(90),
///     ..Default::default()
/// }).await?;
/// println!("job {} scheduled", job.data.id);
/// # Ok(())
/// # }
/// ```
pub struct JobsService {
    inner: Arc<ClientInner>,
}

impl JobsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of jobs.
    pub async fn list(
        &self,
        params: Option<&JobSearchParams>,
    ) -> Result<ApiResponse<Vec<JobReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/scheduling/jobs{query}"), None)
            .await
    }

    /// Create a job.
    pub async fn create(&self, job: &JobWritable) -> Result<ApiResponse<JobReadOnly>> {
        self.inner.post("/scheduling/jobs", Some(job), None).await
    }

    /// Retrieve a specific job by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<JobReadOnly>> {
        self.inner.get(&format!("/scheduling/jobs/{id}"), None).await
    }

    /// Update a job.
    pub async fn update(&self, id: i64, job: &JobWritable) -> Result<ApiResponse<JobReadOnly>> {
        self.inner
            .patch(&format!("/scheduling/jobs/{id}"), Some(job), None)
            .await
    }

    /// Delete a job.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/scheduling/jobs/{id}"), None)
            .await
    }
}

/// Service for job comment operations.
pub struct JobCommentsService {
    inner: Arc<ClientInner>,
}

impl JobCommentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of job comments.
    pub async fn list(
        &self,
        params: Option<&JobCommentSearchParams>,
    ) -> Result<ApiResponse<Vec<JobCommentReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/scheduling/jobs/comments{query}"), None)
            .await
    }

    /// Create a job comment.
    pub async fn create(
        &self,
        comment: &JobCommentWritable,
    ) -> Result<ApiResponse<JobCommentReadOnly>> {
        self.inner
            .post("/scheduling/jobs/comments", Some(comment), None)
            .await
    }

    /// Retrieve a specific job comment by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<JobCommentReadOnly>> {
        self.inner
            .get(&format!("/scheduling/jobs/comments/{id}"), None)
            .await
    }

    /// Update a job comment.
    pub async fn update(
        &self,
        id: i64,
        comment: &JobCommentWritable,
    ) -> Result<ApiResponse<JobCommentReadOnly>> {
        self.inner
            .patch(
                &format!("/scheduling/jobs/comments/{id}"),
                Some(comment),
                None,
            )
            .await
    }

    /// Delete a job comment.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/scheduling/jobs/comments/{id}"), None)
            .await
    }
}

/// Service for job task operations.
pub struct JobTasksService {
    inner: Arc<ClientInner>,
}

impl JobTasksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve the tasks of a job. The job filter is required by the
    /// API.
    pub async fn list(&self, job_id: i64) -> Result<ApiResponse<Vec<JobTaskReadOnly>>> {
        let query = crate::client::query::QueryParams::new()
            .with("jobId", job_id)
            .to_query_string();
        self.inner
            .get(&format!("/scheduling/jobs/tasks{query}"), None)
            .await
    }

    /// Create a job task.
    pub async fn create(&self, task: &JobTaskWritable) -> Result<ApiResponse<JobTaskReadOnly>> {
        self.inner
            .post("/scheduling/jobs/tasks", Some(task), None)
            .await
    }

    /// Retrieve a specific job task by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<JobTaskReadOnly>> {
        self.inner
            .get(&format!("/scheduling/jobs/tasks/{id}"), None)
            .await
    }

    /// Update a job task.
    pub async fn update(
        &self,
        id: i64,
        task: &JobTaskWritable,
    ) -> Result<ApiResponse<JobTaskReadOnly>> {
        self.inner
            .patch(&format!("/scheduling/jobs/tasks/{id}"), Some(task), None)
            .await
    }

    /// Delete a job task.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/scheduling/jobs/tasks/{id}"), None)
            .await
    }
}

/// Service for job attachment operations.
pub struct JobAttachmentsService {
    inner: Arc<ClientInner>,
}

impl JobAttachmentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a collection of job attachments.
    pub async fn list(
        &self,
        params: Option<&JobAttachmentSearchParams>,
    ) -> Result<ApiResponse<Vec<JobAttachmentReadOnly>>> {
        let query = params.map(|p| p.to_query().to_query_string()).unwrap_or_default();
        self.inner
            .get(&format!("/scheduling/jobs/attachments{query}"), None)
            .await
    }

    /// Create a job attachment.
    pub async fn create(
        &self,
        attachment: &JobAttachmentWritable,
    ) -> Result<ApiResponse<JobAttachmentReadOnly>> {
        self.inner
            .post("/scheduling/jobs/attachments", Some(attachment), None)
            .await
    }

    /// Retrieve a specific job attachment by ID.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<JobAttachmentReadOnly>> {
        self.inner
            .get(&format!("/scheduling/jobs/attachments/{id}"), None)
            .await
    }

    /// Update a job attachment.
    pub async fn update(
        &self,
        id: i64,
        attachment: &JobAttachmentWritable,
    ) -> Result<ApiResponse<JobAttachmentReadOnly>> {
        self.inner
            .patch(
                &format!("/scheduling/jobs/attachments/{id}"),
                Some(attachment),
                None,
            )
            .await
    }

    /// Delete a job attachment.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>> {
        self.inner
            .delete(&format!("/scheduling/jobs/attachments/{id}"), None)
            .await
    }

    /// Retrieve the attachment file as raw bytes.
    pub async fn file(&self, id: i64) -> Result<Vec<u8>> {
        self.inner
            .download_file(&format!("/scheduling/jobs/attachments/{id}/file"), None)
            .await
    }
}
