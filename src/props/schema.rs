//! Typed prop surface for external authoring canvases.
//!
//! Components are fully usable without this module; it only describes the configuration fields a
//! no-code editor may expose, so the editor can instantiate a component with plain props.

use crate::particles::field::ParticleFieldConfig;
use crate::scenes::story::StoryConfig;
use crate::scenes::topography::TopographyConfig;

/// Primitive or slot type of one prop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKind {
    /// Floating-point number.
    Number,
    /// Non-negative integer.
    Integer,
    /// Boolean toggle.
    Bool,
    /// Single string.
    Text,
    /// Ordered list of strings.
    TextList,
    /// Hex color string.
    Color,
    /// Nested structured value (edited as JSON).
    Object,
    /// Child content supplied by the canvas.
    Slot,
}

/// One editable prop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PropDesc {
    /// Field name as it appears in the serialized config.
    pub name: &'static str,
    /// Editor type.
    pub kind: PropKind,
    /// Human-readable default, shown as a placeholder.
    pub default: &'static str,
    /// Short description for the editor sidebar.
    pub description: &'static str,
}

impl PropDesc {
    const fn new(
        name: &'static str,
        kind: PropKind,
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            default,
            description,
        }
    }
}

/// A component whose configuration can be authored through a prop schema.
pub trait ComponentProps {
    /// Component name as registered with the canvas.
    const COMPONENT: &'static str;

    /// Editable props, in display order.
    fn prop_schema() -> &'static [PropDesc];
}

/// Registration document for `T`, as JSON.
pub fn schema_json<T: ComponentProps>() -> serde_json::Value {
    serde_json::json!({
        "component": T::COMPONENT,
        "props": T::prop_schema(),
    })
}

const STORY_PROPS: &[PropDesc] = &[
    PropDesc::new("region", PropKind::Object, "{}", "Section height rules in vh"),
    PropDesc::new("dead_zone_placement", PropKind::Text, "trailing", "Where the dead zone sits"),
    PropDesc::new("smoother", PropKind::Object, "{\"smoothing\":0.1}", "Progress smoothing"),
    PropDesc::new("track", PropKind::Object, "viewport_plus", "Track geometry"),
    PropDesc::new("layers", PropKind::Object, "[]", "Parallax layers and factors"),
    PropDesc::new("character_layer", PropKind::Object, "null", "Layer carrying figures"),
    PropDesc::new("characters", PropKind::Object, "[]", "Figures with position and delay"),
    PropDesc::new("reveal", PropKind::Object, "{}", "Reveal timeline"),
    PropDesc::new("headers", PropKind::Object, "[]", "Typed headers with timing offsets"),
    PropDesc::new("header_track_count", PropKind::Integer, "0", "Header slots (0 = auto)"),
    PropDesc::new("typewriter", PropKind::Object, "{}", "Typewriter timing"),
    PropDesc::new("header_layer", PropKind::Text, "header", "Layer receiving header text"),
    PropDesc::new("entrance", PropKind::Object, "null", "Entrance slide-in"),
    PropDesc::new("children", PropKind::Slot, "", "Layer content"),
];

const PARTICLE_PROPS: &[PropDesc] = &[
    PropDesc::new("texts", PropKind::TextList, "4 phrases", "Rotating texts"),
    PropDesc::new("particle_size", PropKind::Number, "1.7", "Particle radius in px"),
    PropDesc::new("particle_color", PropKind::Color, "#06b6d4", "Particle color"),
    PropDesc::new("spacing", PropKind::Integer, "5", "Sampling grid spacing in px"),
    PropDesc::new("mouse_radius", PropKind::Number, "80", "Pointer repulsion radius"),
    PropDesc::new("change_interval_ms", PropKind::Number, "6000", "Text rotation period"),
    PropDesc::new("transition_speed", PropKind::Number, "0.1", "Return-to-target factor"),
    PropDesc::new("alpha_threshold", PropKind::Integer, "128", "Mask alpha cutoff"),
    PropDesc::new("max_particles", PropKind::Integer, "20000", "Active particle cap"),
    PropDesc::new("density_range", PropKind::Object, "[1,31]", "Repulsion density range"),
    PropDesc::new("seed", PropKind::Integer, "0", "Random seed for spawn positions"),
    PropDesc::new("fit", PropKind::Object, "{}", "Font sizing rules"),
];

const TOPOGRAPHY_PROPS: &[PropDesc] = &[
    PropDesc::new("groups", PropKind::Object, "12 groups", "Group ids and pointer strengths"),
    PropDesc::new("smoothing", PropKind::Number, "0.12", "Pointer smoothing"),
    PropDesc::new("oscillators", PropKind::Object, "{}", "Breathe, drift and dash motion"),
    PropDesc::new("breathe_group", PropKind::Text, "Silhouette", "Breathing group"),
    PropDesc::new("face_group", PropKind::Text, "Face-Main", "Pulsing group"),
    PropDesc::new("dotted_group", PropKind::Text, "Details-Dotted", "Dash-animated group"),
];

impl ComponentProps for StoryConfig {
    const COMPONENT: &'static str = "HorizontalStory";

    fn prop_schema() -> &'static [PropDesc] {
        STORY_PROPS
    }
}

impl ComponentProps for ParticleFieldConfig {
    const COMPONENT: &'static str = "ParticleText";

    fn prop_schema() -> &'static [PropDesc] {
        PARTICLE_PROPS
    }
}

impl ComponentProps for TopographyConfig {
    const COMPONENT: &'static str = "HeroTopography";

    fn prop_schema() -> &'static [PropDesc] {
        TOPOGRAPHY_PROPS
    }
}

#[cfg(test)]
#[path = "../../tests/unit/props/schema.rs"]
mod tests;
