//! Job orders: the multi-item print jobs staff submit, track and dispatch.

pub mod aggregate;
pub mod deadline;
pub mod line_item;
pub mod order_form;

pub use aggregate::{
    Job, JobHeader, JobSummary, StatusUpdate, DELIVERY_MODES, JOB_STATUSES, PRIORITIES,
};
pub use deadline::{due_label, upcoming_jobs, DueJob};
pub use line_item::{CoreField, LineItem, LineItemDraft};
pub use order_form::OrderForm;
