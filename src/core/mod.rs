//! Core-Domänentypen: Geometrie, Räume, Katalog, Content-Quelle, Szene, Kamera.

pub mod camera;
pub mod catalog;
pub mod content;
pub mod geometry;
pub mod room;
pub mod scene;
pub mod spatial;

pub use camera::TopDownCamera;
pub use catalog::{Catalog, EntranceBucket, FolderBlock, RoomId, RoomVariant, BUCKET_LABEL_PREFIX};
pub use content::{
    load_catalog, load_selection_arrow, ContentRepository, FolderHandle, FsContentRepository,
    StaticContentRepository, TextureHandle,
};
pub use geometry::{round_dot, Aabb, LayerMask, Pose, QuarterTurns, Ray, RayHit, FORWARD, RIGHT, UP};
pub use room::{Entrance, MeshPart, RoomDefinition};
pub use scene::{
    Collider, ColliderId, ColliderTag, InstanceId, ParentTransform, RoomInstance, SceneInstantiator,
    SceneQuery, SceneWorld,
};
pub use spatial::{ColliderIndex, SpatialMatch};
