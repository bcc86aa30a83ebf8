use ratatui::layout::Rect;

/// `HH:MM:SS` when `show_hours` or at least an hour has passed, else `MM:SS`.
pub fn format_time(seconds: f64, show_hours: bool) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let h = whole / 3600;
    let m = (whole % 3600) / 60;
    let s = whole % 60;

    if show_hours || h > 0 {
        format!("{h:02}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

/// Share of `total` taken by `part`, in percent. Zero total gives 0.0.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Scale that fits a page into a container while keeping its aspect ratio.
pub fn fit_scale(container_w: f64, container_h: f64, page_w: f64, page_h: f64) -> f64 {
    if page_w <= 0.0 || page_h <= 0.0 {
        return 0.0;
    }
    (container_w / page_w).min(container_h / page_h).max(0.0)
}

/// Area a page of `page` cells occupies at `scale`, centered in `area` and
/// clamped to it.
pub fn fitted_rect(area: Rect, page: (u16, u16), scale: f64) -> Rect {
    let width = ((page.0 as f64 * scale).floor() as u16).min(area.width);
    let height = ((page.1 as f64 * scale).floor() as u16).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
