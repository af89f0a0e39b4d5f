use crate::error::{ChartError, ChartResult};
use crate::interaction::PagingStep;
use crate::render::Color;

use super::{AxisLabelConfig, ChartEngineConfig, ChartTheme, ScrollbarConfig};

pub(super) fn validate_engine_config(config: &ChartEngineConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    validate_field_name("category_field", &config.category_field)?;
    validate_field_name("value_field", &config.value_field)?;
    if let Some(series_field) = &config.series_field {
        validate_field_name("series_field", series_field)?;
    }
    if !config.padding.is_finite() || config.padding < 0.0 {
        return Err(ChartError::InvalidConfig(
            "padding must be finite and >= 0".to_owned(),
        ));
    }
    if let Some(scrollbar) = config.scrollbar {
        validate_scrollbar_config(scrollbar)?;
    }
    validate_axis_label_config(config.category_axis)?;
    validate_theme(&config.theme)
}

pub(super) fn validate_scrollbar_config(config: ScrollbarConfig) -> ChartResult<ScrollbarConfig> {
    if !config.category_size.is_finite() || config.category_size <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "scrollbar category_size must be finite and > 0".to_owned(),
        ));
    }
    if let PagingStep::Pixels(pixels) = config.paging {
        if !pixels.is_finite() || pixels <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "scrollbar paging step must be finite and > 0".to_owned(),
            ));
        }
    }
    for (name, color) in [
        ("track_color", config.style.track_color),
        ("thumb_color", config.style.thumb_color),
        ("thumb_highlight_color", config.style.thumb_highlight_color),
    ] {
        if let Some(color) = color {
            validate_color(name, color)?;
        }
    }
    Ok(config)
}

pub(super) fn validate_axis_label_config(config: AxisLabelConfig) -> ChartResult<AxisLabelConfig> {
    if !config.font_size_px.is_finite() || config.font_size_px <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "axis label font_size_px must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_theme(theme: &ChartTheme) -> ChartResult<()> {
    validate_color("theme track_color", theme.scrollbar.default.track_color)?;
    validate_color("theme thumb_color", theme.scrollbar.default.thumb_color)?;
    validate_color("theme hover thumb_color", theme.scrollbar.hover.thumb_color)?;
    validate_color("theme text_color", theme.text_color)?;
    validate_color("theme axis_line_color", theme.axis_line_color)?;
    for color in &theme.palette {
        validate_color("theme palette entry", *color)?;
    }
    Ok(())
}

fn validate_field_name(name: &str, value: &str) -> ChartResult<()> {
    if value.trim().is_empty() {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must not be empty"
        )));
    }
    Ok(())
}

fn validate_color(name: &str, color: Color) -> ChartResult<()> {
    color
        .validate()
        .map_err(|e| ChartError::InvalidConfig(format!("{name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::{validate_engine_config, validate_scrollbar_config};
    use crate::api::{ChartEngineConfig, ScrollbarConfig, ScrollbarStyleConfig};
    use crate::core::{Orientation, Viewport};
    use crate::error::ChartError;
    use crate::interaction::PagingStep;
    use crate::render::Color;

    #[test]
    fn rejects_empty_field_names() {
        let config = ChartEngineConfig::new(Viewport::new(500, 400), " ", "value");
        assert!(matches!(
            validate_engine_config(&config),
            Err(ChartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_viewport() {
        let config = ChartEngineConfig::new(Viewport::new(0, 400), "category", "value");
        assert!(matches!(
            validate_engine_config(&config),
            Err(ChartError::InvalidViewport { width: 0, .. })
        ));
    }

    #[test]
    fn rejects_bad_scrollbar_settings() {
        let config = ScrollbarConfig::new(Orientation::Horizontal).with_category_size(0.0);
        assert!(validate_scrollbar_config(config).is_err());

        let config = ScrollbarConfig::new(Orientation::Vertical).with_paging(PagingStep::Pixels(-3.0));
        assert!(validate_scrollbar_config(config).is_err());

        let config = ScrollbarConfig::new(Orientation::Vertical).with_style(ScrollbarStyleConfig {
            thumb_color: Some(Color::rgb(2.0, 0.0, 0.0)),
            ..ScrollbarStyleConfig::default()
        });
        assert!(validate_scrollbar_config(config).is_err());
    }
}
