use crate::application::use_cases::BrowsePackages;
use crate::application::wizard::{LookupRequest, LookupResponse};
use crate::domain::{entities::PackageRecord, repositories::PackageDirectory};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

type Slot<T> = Arc<Mutex<Option<T>>>;

pub enum AsyncTask {
    Lookup {
        generation: u64,
        response: Slot<LookupResponse>,
    },
    Browse {
        filter: String,
        result: Slot<Result<Vec<PackageRecord>, String>>,
    },
}

#[derive(Default)]
pub struct TaskResult {
    pub lookups: Vec<LookupResponse>,
    pub listing: Option<(String, Result<Vec<PackageRecord>, String>)>,
}

/// Runs directory calls on worker threads and hands their results back to
/// the UI thread through `poll`.
pub struct AsyncTaskManager {
    active_tasks: Vec<AsyncTask>,
}

impl AsyncTaskManager {
    pub fn new() -> Self {
        Self {
            active_tasks: Vec::new(),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.active_tasks.is_empty()
    }

    pub fn is_browsing(&self) -> bool {
        self.active_tasks
            .iter()
            .any(|task| matches!(task, AsyncTask::Browse { .. }))
    }

    pub fn spawn_lookup(&mut self, request: LookupRequest, directory: Arc<dyn PackageDirectory>) {
        let response: Slot<LookupResponse> = Arc::new(Mutex::new(None));
        self.active_tasks.push(AsyncTask::Lookup {
            generation: request.generation,
            response: Arc::clone(&response),
        });

        thread::spawn(move || {
            tracing::trace!("Lookup thread started for #{}", request.generation);
            let generation = request.generation;
            let query = request.query.clone();
            let outcome = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(request.run(directory.as_ref())),
                Err(e) => LookupResponse {
                    generation,
                    query,
                    result: Err(anyhow::Error::new(e).context("Failed to start lookup runtime")),
                },
            };
            *response.lock().unwrap_or_else(PoisonError::into_inner) = Some(outcome);
        });
    }

    /// Ignored while a listing is already loading.
    pub fn spawn_browse(&mut self, filter: String, use_case: Arc<BrowsePackages>) {
        if self.is_browsing() {
            tracing::warn!("Package listing is already loading, ignoring duplicate");
            return;
        }

        let result: Slot<Result<Vec<PackageRecord>, String>> = Arc::new(Mutex::new(None));
        self.active_tasks.push(AsyncTask::Browse {
            filter: filter.clone(),
            result: Arc::clone(&result),
        });

        thread::spawn(move || {
            let outcome = (|| -> anyhow::Result<Vec<PackageRecord>> {
                let rt = tokio::runtime::Runtime::new()?;
                rt.block_on(use_case.execute(&filter))
            })();

            let outcome = match outcome {
                Ok(packages) => {
                    tracing::info!("Loaded {} repository packages for '{}'", packages.len(), filter);
                    Ok(packages)
                }
                Err(e) => {
                    tracing::error!("Package listing failed: {:#}", e);
                    Err(e.to_string())
                }
            };
            *result.lock().unwrap_or_else(PoisonError::into_inner) = Some(outcome);
        });
    }

    pub fn poll(&mut self) -> TaskResult {
        let mut result = TaskResult::default();
        let mut tasks_to_keep = Vec::new();

        for task in self.active_tasks.drain(..) {
            match task {
                AsyncTask::Lookup {
                    generation,
                    response,
                } => {
                    let finished = match response.try_lock() {
                        Ok(mut slot) => slot.take(),
                        Err(_) => None,
                    };
                    match finished {
                        Some(outcome) => result.lookups.push(outcome),
                        None => tasks_to_keep.push(AsyncTask::Lookup {
                            generation,
                            response,
                        }),
                    }
                }
                AsyncTask::Browse {
                    filter,
                    result: listing,
                } => {
                    let finished = match listing.try_lock() {
                        Ok(mut slot) => slot.take(),
                        Err(_) => None,
                    };
                    match finished {
                        Some(outcome) => result.listing = Some((filter, outcome)),
                        None => tasks_to_keep.push(AsyncTask::Browse {
                            filter,
                            result: listing,
                        }),
                    }
                }
            }
        }

        self.active_tasks = tasks_to_keep;
        result
    }
}

impl Default for AsyncTaskManager {
    fn default() -> Self {
        Self::new()
    }
}
