//! Visual parameters → descriptive image parameters

use crate::model::{
    Composition, FormType, GeneratedImageParams, ImageElement, ImageStyle, Mood, VisualParameters,
};

/// Summarize visual parameters as style, composition, mood and element tags
pub fn generate_image_params(visual: &VisualParameters) -> GeneratedImageParams {
    GeneratedImageParams {
        style: style(visual),
        colors: visual.colors.clone(),
        composition: composition(visual),
        mood: mood(visual),
        elements: elements(visual),
    }
}

fn style(visual: &VisualParameters) -> ImageStyle {
    if visual.complexity > 0.7 {
        ImageStyle::Surreal
    } else if visual.movement > 0.6 {
        ImageStyle::Dynamic
    } else if visual.balance > 0.7 {
        ImageStyle::Minimalist
    } else if visual.texture > 0.6 {
        ImageStyle::Textured
    } else {
        ImageStyle::Abstract
    }
}

fn composition(visual: &VisualParameters) -> Composition {
    if visual.balance > 0.7 {
        Composition::Symmetrical
    } else if visual.movement > 0.6 {
        Composition::Diagonal
    } else if visual.complexity > 0.6 {
        Composition::Complex
    } else {
        Composition::Centered
    }
}

fn mood(visual: &VisualParameters) -> Mood {
    if visual.temperature > 0.7 {
        Mood::Warm
    } else if visual.temperature < 0.3 {
        Mood::Cool
    } else if visual.intensity > 0.7 {
        Mood::Energetic
    } else if visual.intensity < 0.3 {
        Mood::Calm
    } else {
        Mood::Balanced
    }
}

fn elements(visual: &VisualParameters) -> Vec<ImageElement> {
    let mut elements = Vec::new();
    if visual.forms.contains(&FormType::Organic) {
        elements.push(ImageElement::OrganicShapes);
    }
    if visual.forms.contains(&FormType::Geometric) {
        elements.push(ImageElement::GeometricPatterns);
    }
    if visual.texture > 0.5 {
        elements.push(ImageElement::TexturedSurfaces);
    }
    if visual.movement > 0.5 {
        elements.push(ImageElement::FlowingLines);
    }
    if elements.is_empty() {
        elements.push(ImageElement::AbstractForms);
    }
    elements
}
