use scrollfx::{ElementBounds, Property};
use scrollfx_adapter::{DashboardElement, DashboardSlot, ScrollDashboard, ScrollRuntime};

fn main() {
    // Example: scroll down the dashboard and back up again; the card reveals replay and
    // reverse, and dropping the view disposes every observer.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut dashboard = match ScrollDashboard::mount(ScrollRuntime::init(), 0) {
        Ok(dashboard) => dashboard,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };
    let registry = dashboard.view().registry();

    let view = dashboard.view_mut();
    view.on_viewport_size(800.0);
    view.on_layout(DashboardElement::Container, ElementBounds::new(0.0, 2400.0));
    view.on_layout(DashboardElement::Header, ElementBounds::new(80.0, 160.0));
    view.on_layout(DashboardElement::Dashboard, ElementBounds::new(0.0, 1200.0));
    view.on_layout(DashboardElement::Evidence, ElementBounds::new(1200.0, 1200.0));

    let path = (0..=100)
        .map(|i| i as f32 * 16.0)
        .chain((0..=100).rev().map(|i| i as f32 * 16.0));
    let mut now_ms = 0u64;
    for scroll_y in path {
        view.on_scroll(scroll_y, now_ms);
        view.tick(now_ms);
        if now_ms.is_multiple_of(320) {
            let opacity = |slot: DashboardSlot| {
                view.style_of(&slot.element())
                    .resolved(Property::Opacity)
            };
            println!(
                "t={now_ms:>4} scroll={scroll_y:>6.1} dashboard={:.2} stats={:.2} live_feed={:.2} gallery={:.2} state={:?}",
                view.style_of(&DashboardElement::Dashboard)
                    .resolved(Property::Opacity),
                opacity(DashboardSlot::StatsPanel),
                opacity(DashboardSlot::LiveFeed),
                opacity(DashboardSlot::EvidenceGallery),
                registry.trigger_state(&DashboardElement::Stats),
            );
        }
        now_ms += 16;
    }

    println!("observers before drop: {}", registry.active_count());
    drop(dashboard);
    println!(
        "observers after drop: {} (timelines: {})",
        registry.active_count(),
        registry.active_timelines()
    );
}
