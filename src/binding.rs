use log::trace;

use crate::FrameSettings;
use crate::color::{OPAQUE, hex_to_argb};

/// A value forwarded to one named input of the preview renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingValue {
    Number(f64),
    /// Packed ARGB color.
    Color(u32),
    Enum(String),
}

/// One named renderer input and the value it should take.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: &'static str,
    pub value: BindingValue,
}

impl Binding {
    fn new(name: &'static str, value: BindingValue) -> Self {
        Self { name, value }
    }
}

/// The inputs a preview renderer exposes for a frame animation.
///
/// Implementors only need to report which inputs exist and accept typed
/// values for them.
pub trait ViewModel {
    fn has_property(&self, name: &str) -> bool;
    fn set_number(&mut self, name: &str, value: f64);
    fn set_color(&mut self, name: &str, argb: u32);
    fn set_enum(&mut self, name: &str, value: &str);
}

/// Renderer inputs derived from `settings`.
///
/// With `transparent` set, the fill color keeps its RGB but gets a zero alpha
/// so the webcam shows through the frame.
pub fn view_model_bindings(settings: &FrameSettings, transparent: bool) -> Vec<Binding> {
    let fill_alpha = if transparent { 0x00 } else { OPAQUE };
    vec![
        Binding::new("rotation", BindingValue::Number(settings.rotation)),
        Binding::new("borderRadius", BindingValue::Number(settings.border_radius)),
        Binding::new("points", BindingValue::Number(settings.points)),
        Binding::new("outerRadius", BindingValue::Number(settings.outer_radius)),
        Binding::new("strokeWidth", BindingValue::Number(settings.stroke_width)),
        Binding::new("color", BindingValue::Color(hex_to_argb(&settings.color, OPAQUE))),
        Binding::new(
            "fillColor",
            BindingValue::Color(hex_to_argb(&settings.fill_color, fill_alpha)),
        ),
        Binding::new("aspectRatio", BindingValue::Enum(settings.aspect_ratio.clone())),
        Binding::new("shape", BindingValue::Enum(settings.shape.clone())),
    ]
}

/// Push `settings` into every input the view model has; returns how many were set.
pub fn apply_bindings<V>(view_model: &mut V, settings: &FrameSettings, transparent: bool) -> usize
where
    V: ViewModel + ?Sized,
{
    let mut applied = 0;
    for binding in view_model_bindings(settings, transparent) {
        if !view_model.has_property(binding.name) {
            continue;
        }
        trace!("binding {} = {:?}", binding.name, binding.value);
        match &binding.value {
            BindingValue::Number(v) => view_model.set_number(binding.name, *v),
            BindingValue::Color(argb) => view_model.set_color(binding.name, *argb),
            BindingValue::Enum(v) => view_model.set_enum(binding.name, v),
        }
        applied += 1;
    }
    applied
}
