use crate::engine::events::HostEvent;
use crate::engine::frame_loop::Scene;
use crate::foundation::core::{SectionBounds, Vec2, Viewport};
use crate::foundation::error::{MotionError, MotionResult};
use crate::parallax::layer::{LayerConfig, TrackGeometry, TrackMetrics};
use crate::render::target::{BackingStore, LayerStyle, RenderTarget};
use crate::reveal::scheduler::{RevealConfig, RevealItem, RevealScheduler, TrackWindow};
use crate::scroll::region::{RegionConfig, ScrollRegion};
use crate::scroll::sampler::{DeadZonePlacement, ScrollSampler};
use crate::scroll::smoother::{ProgressState, Smoother, SmootherConfig};
use crate::typewriter::header::{Header, HeaderTrack, HeaderTypewriterState, TypewriterConfig};

/// A foreground figure placed on the track and revealed on a timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterConfig {
    /// Render-target layer id.
    pub id: String,
    /// Horizontal position in intrinsic track pixels (scaled with the cover scale).
    pub position: f64,
    /// Authored reveal delay in timeline milliseconds.
    pub delay_ms: f64,
    /// Show immediately, without an entrance.
    #[serde(default)]
    pub skip_animation: bool,
}

/// One-shot slide-in applied to the whole track when the section first appears.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    /// Horizontal offset before entering.
    pub offset_px: f64,
    /// Visible ratio that counts as entered.
    pub threshold: f64,
    /// Time after mount after which the section counts as entered regardless.
    pub fallback_ms: f64,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            offset_px: -40.0,
            threshold: 0.25,
            fallback_ms: 200.0,
        }
    }
}

/// Horizontal storytelling section: parallax layers, timed figures and typed headers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Section height rules.
    pub region: RegionConfig,
    /// Where the dead zone sits in the scroll travel.
    pub dead_zone_placement: DeadZonePlacement,
    /// Progress smoothing.
    pub smoother: SmootherConfig,
    /// Track geometry used for `maxShift`.
    pub track: TrackGeometry,
    /// Layers translated by progress.
    pub layers: Vec<LayerConfig>,
    /// Layer carrying the characters; its factor also positions the culling window.
    pub character_layer: Option<LayerConfig>,
    /// Revealed figures.
    pub characters: Vec<CharacterConfig>,
    /// Shared reveal timeline.
    pub reveal: RevealConfig,
    /// Typed headers.
    pub headers: Vec<Header>,
    /// Header slots; 0 uses the cover image count, else the header count.
    pub header_track_count: usize,
    /// Typewriter timing.
    pub typewriter: TypewriterConfig,
    /// Layer id receiving header text and float/opacity.
    pub header_layer: String,
    /// Track entrance, applied to the `entrance` layer.
    pub entrance: Option<EntranceConfig>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            region: RegionConfig::default(),
            dead_zone_placement: DeadZonePlacement::default(),
            smoother: SmootherConfig::default(),
            track: TrackGeometry::ViewportPlus { extra_px: 0.0 },
            layers: Vec::new(),
            character_layer: None,
            characters: Vec::new(),
            reveal: RevealConfig::default(),
            headers: Vec::new(),
            header_track_count: 0,
            typewriter: TypewriterConfig::default(),
            header_layer: "header".to_owned(),
            entrance: None,
        }
    }
}

/// Layer id that receives the entrance offset.
pub const ENTRANCE_LAYER: &str = "entrance";

impl StoryConfig {
    /// Eight cover images, nine figures and eight typed headers over an 800vh section.
    pub fn about_story() -> Self {
        let characters = [
            (90.0, -450.0),
            (2280.0, 1000.0),
            (3150.0, 1600.0),
            (4750.0, 2600.0),
            (6400.0, 3700.0),
            (8800.0, 5200.0),
            (10700.0, 6500.0),
            (12700.0, 8300.0),
            (14600.0, 9600.0),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (position, delay_ms))| CharacterConfig {
            id: format!("me{}", i + 1),
            position,
            delay_ms,
            skip_animation: false,
        })
        .collect();

        let headers = vec![
            Header::new(
                "I grew up between two worlds\n\
                 the discipline of music and the curiosity of technology.\n\
                 My room was my first studio, my first lab, my first universe.",
            ),
            Header::new(
                "In Messina's music shop, I learned that creativity has no boundaries.\n\
                 Every instrument was a new world\n\
                 and I wanted to explore them all.",
            ),
            Header::new(
                "At my grandma's home, the sea taught me perspective.\n\
                 It showed me that the world was wider than the one I knew\n\
                 and that I wanted to reach it.",
            ),
            Header::new(
                "The Conservatory shaped my discipline\n\
                 but also tested my passion.\n\
                 Not every chapter is beautiful\n\
                 but every chapter transforms you.",
            ),
            Header::new(
                "Leaving Sicily wasn't a move.\n\
                 It was an escape from stagnation,\n\
                 a leap into uncertainty,\n\
                 and the beginning of my reinvention.",
            ),
            Header::new(
                "Hamburg gave me space to evolve.\n\
                 Here I became a designer, a product leader,\n\
                 and someone who builds AI-first experiences.",
            ),
            Header::new(
                "Competition taught me strategy, resilience,\n\
                 and how to perform under pressure.\n\
                 Gaming wasn't a pastime\n\
                 it was my training ground for leadership.",
            )
            .with_timing_offset(0.12),
            Header::new(
                "Every place shaped me.\n\
                 Every challenge sharpened me.\n\
                 Every passion converged into the way I build.\n\
                 And now\n\
                 I'm ready for what comes next.",
            )
            .with_timing_offset(0.12),
        ];

        Self {
            region: RegionConfig {
                section_height_vh: Some(800.0),
                scroll_vh_desktop: 800.0,
                dead_zone_vh: 10.0,
                ..RegionConfig::default()
            },
            smoother: SmootherConfig {
                smoothing: 0.3,
                ..SmootherConfig::default()
            },
            track: TrackGeometry::CoverImages {
                image_width: 2048.0,
                image_height: 904.0,
                count: 8,
            },
            layers: vec![LayerConfig::new("background", 1.0)],
            character_layer: Some(LayerConfig::new("characters", 1.0)),
            characters,
            headers,
            entrance: Some(EntranceConfig::default()),
            ..Self::default()
        }
    }

    /// Four depth layers over a 600vh section.
    pub fn layered() -> Self {
        Self {
            region: RegionConfig {
                scroll_vh_desktop: 600.0,
                ..RegionConfig::default()
            },
            smoother: SmootherConfig {
                smoothing: 0.1,
                ..SmootherConfig::default()
            },
            track: TrackGeometry::ViewportPlus { extra_px: 2000.0 },
            layers: vec![
                LayerConfig::new("bg", 1.0),
                LayerConfig::new("mid", 1.25),
                LayerConfig::new("front", 1.6),
                LayerConfig::new("people", 1.45),
            ],
            ..Self::default()
        }
    }

    /// Validate every nested config.
    pub fn validate(&self) -> MotionResult<()> {
        self.region.validate()?;
        self.smoother.validate()?;
        self.track.validate()?;
        self.reveal.validate()?;
        self.typewriter.validate()?;
        for layer in self.layers.iter().chain(self.character_layer.iter()) {
            if !layer.parallax_factor.is_finite() {
                return Err(MotionError::validation(format!(
                    "layer '{}' parallax_factor must be finite",
                    layer.id
                )));
            }
        }
        if let Some(e) = self.entrance
            && !(e.offset_px.is_finite() && e.threshold.is_finite() && e.fallback_ms >= 0.0)
        {
            return Err(MotionError::validation("entrance values must be finite"));
        }
        Ok(())
    }

    fn header_slots(&self) -> usize {
        match (self.header_track_count, &self.track) {
            (0, TrackGeometry::CoverImages { count, .. }) if *count > 0 => *count,
            (n, _) => n,
        }
    }
}

/// Mounted story section.
#[derive(Debug)]
pub struct StoryScene {
    layers: Vec<LayerConfig>,
    character_layer: Option<LayerConfig>,
    characters: Vec<(String, f64, RevealItem)>,
    track: TrackGeometry,
    entrance: Option<EntranceConfig>,
    header_layer: String,

    region: ScrollRegion,
    sampler: ScrollSampler,
    smoother: Smoother,
    reveal: RevealScheduler,
    headers: HeaderTrack,

    viewport: Viewport,
    metrics: TrackMetrics,
    progress: ProgressState,
    entered: bool,
    mounted_ms: f64,
}

impl StoryScene {
    /// Mount with an optional host viewport; `None` uses the server-side default.
    ///
    /// Progress starts at zero until the first `Scroll` or `Resize` event. A host restoring a
    /// page mid-section should chain [`StoryScene::with_initial_section`].
    pub fn new(config: StoryConfig, viewport: Option<Viewport>) -> MotionResult<Self> {
        config.validate()?;
        let vp = Viewport::or_default(viewport);
        let region = ScrollRegion::new(config.region.clone(), viewport)?;
        let sampler = ScrollSampler::new(region.dead_zone_vh(), config.dead_zone_placement);
        let header_slots = config.header_slots();
        let headers = HeaderTrack::new(config.typewriter, config.headers, header_slots)?;
        let reveal = RevealScheduler::new(config.reveal)?;
        let characters = config
            .characters
            .into_iter()
            .map(|c| {
                let mut item = reveal.config().item_from_delay(c.delay_ms);
                item.skip_animation = c.skip_animation;
                (c.id, c.position, item)
            })
            .collect();
        let metrics = TrackMetrics::measure(&config.track, vp);
        tracing::debug!(
            max_shift = metrics.max_shift,
            height_vh = region.height_vh(),
            "story mounted"
        );

        Ok(Self {
            layers: config.layers,
            character_layer: config.character_layer,
            characters,
            track: config.track,
            entrance: config.entrance,
            header_layer: config.header_layer,
            region,
            sampler,
            smoother: Smoother::new(config.smoother)?,
            reveal,
            headers,
            viewport: vp,
            metrics,
            progress: ProgressState::default(),
            entered: config.entrance.is_none(),
            mounted_ms: 0.0,
        })
    }

    /// Sample the section's position at mount, as a scroll event would.
    pub fn with_initial_section(mut self, section: SectionBounds) -> Self {
        self.on_scroll(section);
        self
    }

    /// Scroll region sizing.
    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    /// Track metrics for the current viewport.
    pub fn metrics(&self) -> TrackMetrics {
        self.metrics
    }

    /// Target/current progress.
    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    /// Section bounds for a document scroll offset, with the section starting at the top.
    pub fn bounds_at(&self, scroll_offset: f64) -> SectionBounds {
        SectionBounds {
            top: -scroll_offset,
            height: self.region.height_px(self.viewport),
        }
    }

    /// Whether the entrance has completed.
    pub fn entered(&self) -> bool {
        self.entered
    }

    /// Header state at the current smoothed progress.
    pub fn header_state(&self) -> HeaderTypewriterState {
        self.headers.state(self.progress.current)
    }

    fn on_scroll(&mut self, section: SectionBounds) {
        self.sampler
            .write_target(section, self.viewport.height, &mut self.progress);
    }

    fn on_resize(&mut self, viewport: Viewport, section: SectionBounds) {
        self.viewport = Viewport::or_default(Some(viewport));
        self.region.resize(Some(self.viewport));
        self.metrics = TrackMetrics::measure(&self.track, self.viewport);
        tracing::debug!(
            max_shift = self.metrics.max_shift,
            height_vh = self.region.height_vh(),
            "story resized"
        );
        self.on_scroll(section);
    }
}

impl Scene for StoryScene {
    fn handle_event(&mut self, event: &HostEvent) {
        match *event {
            HostEvent::Scroll { section } => self.on_scroll(section),
            HostEvent::Resize { viewport, section } => self.on_resize(viewport, section),
            HostEvent::Visibility { ratio } => {
                if let Some(e) = self.entrance
                    && ratio >= e.threshold
                {
                    self.entered = true;
                }
            }
            HostEvent::PointerMove { .. } | HostEvent::PointerLeave => {}
        }
    }

    fn update(&mut self, dt_ms: f64) {
        self.mounted_ms += dt_ms;
        if let Some(e) = self.entrance
            && !self.entered
            && self.mounted_ms >= e.fallback_ms
        {
            self.entered = true;
        }
        self.smoother.step(&mut self.progress);
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        let p = self.progress.current;

        if let Some(e) = self.entrance {
            let x = if self.entered { 0.0 } else { e.offset_px };
            target.apply_transform(ENTRANCE_LAYER, LayerStyle::translate_x(x));
        }

        for layer in &self.layers {
            let x = self.metrics.offset(p, layer.parallax_factor);
            target.apply_transform(&layer.id, LayerStyle::translate_x(x));
        }

        let char_factor = self
            .character_layer
            .as_ref()
            .map_or(1.0, |l| l.parallax_factor);
        if let Some(layer) = &self.character_layer {
            target.apply_transform(
                &layer.id,
                LayerStyle::translate_x(self.metrics.offset(p, char_factor)),
            );
        }
        let window = TrackWindow {
            scroll_offset: -self.metrics.offset(p, char_factor),
            viewport_width: self.viewport.width,
        };
        for (id, position, item) in &self.characters {
            let x = position * self.metrics.scale;
            let style = self.reveal.style_at(item, p, x, window);
            let layer_style = LayerStyle::translate(Vec2::new(0.0, style.translate_y))
                .with_opacity(style.opacity);
            target.apply_transform(id, layer_style);
        }

        let header = self.headers.state(p);
        target.set_text(&self.header_layer, self.headers.typed_text(&header));
        target.apply_transform(
            &self.header_layer,
            LayerStyle::translate(Vec2::new(0.0, header.float_y)).with_opacity(header.opacity),
        );
    }

    fn backing_store(&self) -> BackingStore {
        BackingStore::for_viewport(self.viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/story.rs"]
mod tests;
