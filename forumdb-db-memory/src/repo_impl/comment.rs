use super::*;

#[async_trait]
impl CommentRepository for MemoryDb {
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>> {
        Ok(self
            .comments_by_thread
            .get(thread_id)
            .cloned()
            .unwrap_or_default())
    }
}
