use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::TaskResult;
use crate::{
    catalog::api,
    core::models::PlantQuery,
};

/// Runs catalog requests off the UI thread. Results come back over an mpsc
/// channel and are drained by the app once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_filter_options(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::fetch_filter_options(&base_url).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::FilterOptionsLoaded(result));
        });
    }

    pub fn fetch_plants(&self, base_url: String, seq: u64, query: PlantQuery) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::fetch_plants(&base_url, &query).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::PlantsFetched { seq, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
