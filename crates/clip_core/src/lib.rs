//! Clip core: task model, resource classification and task-set scheduling.
mod clock;
mod factory;
mod filename;
mod info;
mod resource;
mod task;
mod task_set;

pub use clock::{Clock, ManualClock, SystemClock};
pub use factory::{RequestParams, StaticRequestParams, TaskFactory};
pub use filename::{asset_filename, DEFAULT_EXTENSION};
pub use info::ClipInfo;
pub use resource::{
    classify, extension_to_mime_type, mime_type_to_extension, resolve_file_extension,
    url_extension, ResourceCategory,
};
pub use task::{InlineKind, RemoteKind, Task, TaskContent, TaskKind};
pub use task_set::{
    dedupe_by_filename, order_for_execution, prepare_task_set, resolve_paths, PreparedTaskSet,
    ResolvedPaths,
};
