use super::*;

#[async_trait]
impl ReplyRepository for MemoryDb {
    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<Reply>> {
        Ok(self
            .replies_by_comment
            .get(comment_id)
            .cloned()
            .unwrap_or_default())
    }
}
