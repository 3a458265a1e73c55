use crate::{
    controllers::{
        App, FollowUp,
        list::{Confirm, DELETE_PROMPT},
    },
    data::{RecordStore, student::StudentId},
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Shared by every handler. The `App` behind the mutex is the single owner of
/// view, draft, record set and banner. The lock is never held across a store
/// call, so pages rendered meanwhile show the busy state.
#[derive(Debug)]
pub struct RollbookState<S> {
    app: Arc<Mutex<App>>,
    store: S,
}

impl<S: Clone> Clone for RollbookState<S> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
            store: self.store.clone(),
        }
    }
}

impl<S: RecordStore> RollbookState<S> {
    pub fn new(store: S) -> Self {
        Self {
            app: Arc::new(Mutex::new(App::default())),
            store,
        }
    }

    #[cfg(test)]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub async fn app(&self) -> MutexGuard<'_, App> {
        self.app.lock().await
    }

    /// Switches to the list and fetches it. Hands back the lock for rendering.
    pub async fn view_all(&self) -> MutexGuard<'_, App> {
        self.app().await.view_all();
        self.refetch().await
    }

    /// `prepare` runs under the same lock as validation, so the draft it
    /// fills in is the one that gets sent.
    pub async fn submit(&self, prepare: impl FnOnce(&mut App) + Send) -> MutexGuard<'_, App> {
        let started = {
            let mut app = self.app().await;
            prepare(&mut *app);
            app.begin_submit()
        };

        let write = match started {
            Ok(write) => write,
            Err(outcome) => {
                debug!(?outcome, "Nothing sent");
                return self.app().await;
            }
        };

        let result = write.send(&self.store).await;
        let follow_up = self.app().await.finish_submit(&write, result);
        self.follow(follow_up).await
    }

    pub async fn delete(&self, id: &StudentId, confirm: &impl Confirm) -> MutexGuard<'_, App> {
        if !confirm.confirm(DELETE_PROMPT).await {
            return self.app().await;
        }

        self.app().await.begin_delete();
        let result = self.store.delete(id).await;
        let follow_up = self.app().await.finish_delete(id, result);
        self.follow(follow_up).await
    }

    async fn follow(&self, follow_up: FollowUp) -> MutexGuard<'_, App> {
        match follow_up {
            FollowUp::Refetch => self.refetch().await,
            FollowUp::Done => self.app().await,
        }
    }

    async fn refetch(&self) -> MutexGuard<'_, App> {
        let result = self.store.list().await;
        let mut app = self.app().await;
        app.finish_listing(result);
        app
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Student Management System" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center text-white" {
                    (markup)
                }
            }
        }
    }
}
