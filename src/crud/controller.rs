//! Page Controller
//!
//! Runs the service calls behind a CRUD page and reports every outcome
//! as a `PageAction`. The controller never touches state directly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::models::{BoxPayload, DonationBox, Entity, EntityId};
use crate::services::CrudService;

use super::descriptor::EntityDescriptor;
use super::state::PageAction;

pub type Dispatch<D> = Arc<dyn Fn(PageAction<D>) + Send + Sync>;

/// Source of the boxes offered in form dropdowns
pub type RefSource = Arc<dyn CrudService<DonationBox, Payload = BoxPayload>>;

type StatusOf<D> = <<D as EntityDescriptor>::Entity as Entity>::Status;

pub struct CrudController<D, S>
where
    D: EntityDescriptor,
    S: CrudService<D::Entity, Payload = D::Payload>,
{
    service: Arc<S>,
    refs: Option<RefSource>,
    dispatch: Dispatch<D>,
    requests: AtomicU64,
}

impl<D, S> CrudController<D, S>
where
    D: EntityDescriptor,
    S: CrudService<D::Entity, Payload = D::Payload>,
{
    pub fn new(service: Arc<S>, dispatch: Dispatch<D>) -> Self {
        Self {
            service,
            refs: None,
            dispatch,
            requests: AtomicU64::new(0),
        }
    }

    pub fn with_refs(mut self, refs: RefSource) -> Self {
        self.refs = Some(refs);
        self
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    fn emit(&self, action: PageAction<D>) {
        log::debug!("{:?} page: {}", D::KIND, action.name());
        (self.dispatch)(action);
    }

    /// Initial mount: the list, then the dropdown boxes
    pub async fn load(&self) {
        self.refresh().await;
        self.load_refs().await;
    }

    /// Refetch the list from scratch
    pub async fn refresh(&self) {
        let request = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        self.emit(PageAction::FetchStarted { request });
        match self.service.list().await {
            Ok(items) => self.emit(PageAction::FetchSucceeded { request, items }),
            Err(err) => {
                log::error!("Failed to load {:?} list: {}", D::KIND, err);
                self.emit(PageAction::FetchFailed { request });
            }
        }
    }

    pub async fn load_refs(&self) {
        let (Some(source), Some(keep)) = (self.refs.as_ref(), D::ref_filter()) else {
            return;
        };
        self.emit(PageAction::RefsStarted);
        match source.list().await {
            Ok(boxes) => {
                let boxes = boxes.into_iter().filter(|b| keep(b)).collect();
                self.emit(PageAction::RefsLoaded(boxes));
            }
            Err(err) => {
                log::error!("Failed to load boxes for {:?} form: {}", D::KIND, err);
                self.emit(PageAction::RefsFailed);
            }
        }
    }

    /// Create when `editing` is `None`, full update otherwise.
    /// Returns whether a call was made and succeeded.
    pub async fn submit(&self, editing: Option<EntityId>, form: &D::Form) -> bool {
        if !D::can_submit(form) {
            log::warn!("{:?} form submitted without required fields", D::KIND);
            return false;
        }
        self.emit(PageAction::SaveStarted);
        let payload = D::build_payload(form);
        let result = match editing {
            Some(id) => self.service.update(id, &payload).await,
            None => self.service.create(&payload).await,
        };
        match result {
            Ok(saved) => {
                log::info!("Saved {:?} #{}", D::KIND, saved.id());
                self.emit(PageAction::SaveSucceeded { created: editing.is_none() });
                self.refresh().await;
                true
            }
            Err(err) => {
                log::error!("Failed to save {:?}: {}", D::KIND, err);
                self.emit(PageAction::SaveFailed);
                false
            }
        }
    }

    /// No call is made unless the user confirmed
    pub async fn delete(&self, id: EntityId, confirmed: bool) -> bool {
        if !confirmed {
            log::debug!("Delete of {:?} #{} cancelled", D::KIND, id);
            return false;
        }
        match self.service.delete(id).await {
            Ok(()) => {
                log::info!("Deleted {:?} #{}", D::KIND, id);
                self.emit(PageAction::DeleteSucceeded);
                self.refresh().await;
                true
            }
            Err(err) => {
                log::error!("Failed to delete {:?} #{}: {}", D::KIND, id, err);
                self.emit(PageAction::DeleteFailed);
                false
            }
        }
    }

    /// One-click status change through the narrow endpoint
    pub async fn shortcut(&self, id: EntityId, status: StatusOf<D>) -> bool {
        match self.service.transition(id, status).await {
            Ok(_) => {
                self.emit(PageAction::ShortcutSucceeded);
                self.refresh().await;
                true
            }
            Err(err) => {
                log::error!("Failed to change {:?} #{} status: {}", D::KIND, id, err);
                self.emit(PageAction::ShortcutFailed);
                false
            }
        }
    }
}
