use std::sync::Arc;

use scrollfx::{ElementBounds, Property};
use scrollfx_adapter::{FEATURES, HomeElement, HomeProps, ScrollHome, ScrollRuntime};

fn main() {
    // Example: the landing page driven by a simulated scroll, without any UI objects.
    //
    // A host would:
    // - call ScrollRuntime::init() once at startup
    // - report viewport size and element geometry after layout
    // - forward scroll events and tick every frame
    // - apply the returned styles to its own elements
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runtime = ScrollRuntime::init();
    let props = HomeProps {
        on_upload_complete: Arc::new(|| println!("upload complete")),
        is_processing: false,
    };
    let mut home = match ScrollHome::mount(runtime, props, 0) {
        Ok(home) => home,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };

    let view = home.view_mut();
    view.on_viewport_size(900.0);
    view.on_layout(HomeElement::Container, ElementBounds::new(0.0, 3600.0));
    view.on_layout(HomeElement::Hero, ElementBounds::new(0.0, 900.0));
    view.on_layout(HomeElement::FeaturesHeading, ElementBounds::new(1800.0, 120.0));
    view.on_layout(HomeElement::Uploader, ElementBounds::new(900.0, 900.0));
    view.on_layout(HomeElement::Features, ElementBounds::new(1800.0, 1200.0));

    let mut now_ms = 0u64;
    let mut scroll_y = 0.0f32;
    while now_ms <= 6000 {
        if now_ms >= 1000 && scroll_y < 2700.0 {
            scroll_y = (scroll_y + 12.0).min(2700.0);
            view.on_scroll(scroll_y, now_ms);
        }
        let animating = view.tick(now_ms);

        if now_ms.is_multiple_of(480) {
            let hero = view.style_of(&HomeElement::Hero);
            let cards: Vec<String> = (0..FEATURES.len())
                .map(|i| {
                    let style = view.style_of(&HomeElement::FeatureCard(i));
                    format!("{:.2}", style.resolved(Property::Opacity))
                })
                .collect();
            println!(
                "t={now_ms:>4} scroll={scroll_y:>6.1} progress={:.3} hero(y={:.1}, opacity={:.2}) cards=[{}] animating={animating}",
                view.progress(),
                hero.resolved(Property::Y),
                hero.resolved(Property::Opacity),
                cards.join(", ")
            );
        }
        now_ms += 16;
    }

    home.uploader().notify_upload_complete();
    home.set_processing(true);
    println!("uploader processing={}", home.uploader().is_processing());
    home.unmount();
}
