use crate::particles::{ParticleConfig, ParticleField};
use dioxus::prelude::*;
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
/// Frames of 60 fps motion covered by one tick.
const FRAME_STEP: f64 = 2.0;
const INITIAL_SIZE: (f64, f64) = (1280.0, 800.0);

/// `pointer` is in client coordinates; `None` when the pointer left the app.
#[component]
pub fn ParticleBackground(
    config: ParticleConfig,
    pointer: Signal<Option<(f64, f64)>>,
) -> Element {
    let mut field = use_signal(move || {
        ParticleField::new(config, INITIAL_SIZE.0, INITIAL_SIZE.1, rand::random())
    });
    // Client-space origin of the canvas, so the pointer maps onto field coordinates.
    let mut origin = use_signal(|| (0.0, 0.0));

    use_future(move || async move {
        loop {
            tokio::time::sleep(FRAME_INTERVAL).await;
            field.with_mut(|f| f.step(FRAME_STEP));
        }
    });

    let snapshot = field.read();
    let (width, height) = snapshot.size();
    let particles = snapshot.particles();
    let segments: Vec<(f64, f64, f64, f64, f64)> = snapshot
        .links()
        .into_iter()
        .map(|link| {
            let (a, b) = (particles[link.from], particles[link.to]);
            (a.x, a.y, b.x, b.y, link.opacity)
        })
        .collect();
    let (ox, oy) = origin();
    let local_pointer = pointer().map(|(x, y)| (x - ox, y - oy));
    let dots: Vec<(f64, f64, f64, f64)> = particles
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (radius, opacity) = snapshot.appearance(i, local_pointer);
            (p.x, p.y, radius, opacity)
        })
        .collect();

    rsx! {
        svg {
            class: "particle-canvas",
            view_box: "0 0 {width} {height}",
            preserve_aspect_ratio: "xMidYMid slice",
            onmounted: move |ev| async move {
                match ev.get_client_rect().await {
                    Ok(rect) if rect.size.width > 0.0 && rect.size.height > 0.0 => {
                        origin.set((rect.origin.x, rect.origin.y));
                        field.with_mut(|f| f.resize(rect.size.width, rect.size.height));
                    }
                    Ok(_) => {}
                    Err(err) => tracing::debug!("particle canvas size unavailable: {:?}", err),
                }
            },
            for (x1, y1, x2, y2, link_opacity) in segments {
                line {
                    x1: "{x1}",
                    y1: "{y1}",
                    x2: "{x2}",
                    y2: "{y2}",
                    stroke_opacity: "{link_opacity}",
                }
            }
            for (cx, cy, radius, opacity) in dots {
                circle {
                    cx: "{cx}",
                    cy: "{cy}",
                    r: "{radius}",
                    fill_opacity: "{opacity}",
                }
            }
        }
    }
}
