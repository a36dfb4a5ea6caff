//! Folio Motion is a scroll-driven animation and parallax engine for portfolio pages.
//!
//! The engine is host-agnostic. A host (browser bridge, native shell, or the headless preview
//! binary) feeds [`HostEvent`]s into a [`FrameLoop`] and supplies a [`RenderTarget`]; the scene
//! turns scroll and pointer input into per-layer transforms, typed header text, and particle
//! draws once per frame.
//!
//! - Scroll pipeline: [`ScrollRegion`] sizing, [`ScrollSampler`] progress, [`Smoother`] easing
//! - Consumers: parallax [`TrackMetrics`], [`RevealScheduler`], [`HeaderTrack`], [`ParticleField`]
//! - Scenes: [`StoryScene`] (horizontal story) and [`TopographyScene`] (pointer depth portrait)
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod animation;
pub(crate) mod assets;
pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod foundation;
pub(crate) mod parallax;
pub(crate) mod particles;
pub(crate) mod props;
pub(crate) mod render;
pub(crate) mod reveal;
pub(crate) mod scenes;
pub(crate) mod scroll;
pub(crate) mod typewriter;

pub use crate::foundation::core::{Affine, Point, Rect, Rgba8, SectionBounds, Vec2, Viewport};
pub use crate::foundation::error::{MotionError, MotionResult};
pub use crate::foundation::math::{Rng64, clamp01, lerp, normalize, ratio_or};

pub use crate::animation::ease::Ease;
pub use crate::assets::image::{
    ImageOrigin, LoadedImage, PreparedImage, decode_image, load_image, load_image_or_fallback,
};
pub use crate::assets::svg::{PreparedSvg, SvgGroup};
pub use crate::config::SceneFile;
pub use crate::engine::events::HostEvent;
pub use crate::engine::frame_loop::{FrameLoop, FrameLoopConfig, FrameStats, Scene};
pub use crate::parallax::layer::{LayerConfig, TrackGeometry, TrackMetrics, layer_offset};
pub use crate::parallax::pointer::{
    CursorFollowConfig, CursorFollower, OscillatorConfig, OscillatorSample, PointerParallax,
    PointerState, normalized_pointer,
};
pub use crate::particles::field::{ParticleField, ParticleFieldConfig};
pub use crate::particles::mask::AlphaMask;
pub use crate::particles::particle::{Dynamics, Particle, ParticleId};
pub use crate::particles::pool::{ParticlePool, Reconciliation, SpawnParams};
pub use crate::particles::text_raster::{ParleyRasterizer, TextFit, TextRasterizer};
pub use crate::props::schema::{ComponentProps, PropDesc, PropKind, schema_json};
pub use crate::render::cpu::{FrameRgba8, PixmapTarget};
pub use crate::render::target::{
    BackingStore, LayerStyle, RecordingTarget, RenderCommand, RenderTarget,
};
pub use crate::reveal::scheduler::{
    RevealConfig, RevealItem, RevealScheduler, RevealStyle, TrackWindow,
};
pub use crate::scenes::story::{
    CharacterConfig, ENTRANCE_LAYER, EntranceConfig, StoryConfig, StoryScene,
};
pub use crate::scenes::topography::{GroupDepth, TopographyConfig, TopographyScene};
pub use crate::scroll::region::{RegionConfig, ScrollRegion};
pub use crate::scroll::sampler::{DeadZonePlacement, ScrollSample, ScrollSampler};
pub use crate::scroll::smoother::{ProgressState, Smoother, SmootherConfig};
pub use crate::scroll::wheel::{WheelOutcome, WheelTrack, WheelTrackConfig};
pub use crate::typewriter::header::{
    Header, HeaderPhase, HeaderTrack, HeaderTypewriterState, PhaseTimings, TypewriterConfig,
    char_prefix,
};
