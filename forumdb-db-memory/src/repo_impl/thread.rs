use super::*;

#[async_trait]
impl ThreadRepository for MemoryDb {
    async fn get_thread_by_id(&self, id: &str) -> Result<Thread> {
        self.threads.get(id).cloned().ok_or(repo::Error::NotFound)
    }
}
