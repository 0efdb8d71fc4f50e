//! Web interface for manually labeling crawled articles.
//!
//! Three routes: the static labeling page, a JSON endpoint handing out one
//! random unlabeled record, and a form endpoint applying a label. State is
//! the loaded collection behind a mutex; a single human operator is
//! assumed, so there is no further concurrency control.

mod handlers;
mod labels;
mod routes;

pub use labels::{LabelBook, Picked};
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::sites::Site;
use crate::store::Store;

/// Shared state for the labeling server
#[derive(Clone)]
pub struct AppState {
    pub book: Arc<Mutex<LabelBook>>,
}

/// Load a site's collection and run the labeling server until killed
pub async fn serve(
    store: Store,
    site: Site,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let book = LabelBook::load(store, site)?;
    let state = AppState {
        book: Arc::new(Mutex::new(book)),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    ::log::info!("Labeling interface listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
