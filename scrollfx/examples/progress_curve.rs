// Example: raw vs. smoothed container progress, and what a range mapping makes of it.
use scrollfx::{
    ElementBounds, ProgressSmoother, ProgressSource, Property, PropertyMapping, RangeMapping,
    SpringConfig, Style,
};

fn main() {
    let container = ElementBounds::new(0.0, 3000.0);
    let viewport_height = 1000.0;
    let source = ProgressSource::CONTAINER;
    let fade = match RangeMapping::linear(0.0, 0.5, 1.0, 0.3) {
        Ok(mapping) => PropertyMapping::new(Property::Opacity, mapping),
        Err(err) => {
            eprintln!("invalid mapping: {err}");
            return;
        }
    };
    let mut smoother = ProgressSmoother::new(SpringConfig::SCROLL);

    // A fast fling to the middle of the page, then a slow drift to the end.
    let mut now_ms = 0u64;
    let mut scroll_y = 0.0f32;
    while now_ms <= 4000 {
        scroll_y = if now_ms < 200 {
            now_ms as f32 * 5.0
        } else {
            (scroll_y + 4.0).min(2000.0)
        };
        let raw = source.progress(scroll_y, container, viewport_height);
        smoother.set_raw(raw);
        let smoothed = smoother.advance(now_ms);

        if now_ms.is_multiple_of(160) {
            let mut style = Style::EMPTY;
            fade.apply(smoothed, &mut style);
            println!(
                "t={now_ms:>4} scroll={scroll_y:>6.1} raw={raw:.3} smoothed={smoothed:.3} opacity={:.3}",
                style.resolved(Property::Opacity)
            );
        }
        now_ms += 16;
    }
}
