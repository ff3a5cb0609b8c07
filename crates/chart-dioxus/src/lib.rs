// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus front-end for the price chart: SVG line with a pointer/touch-driven tooltip.
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The series load is owned by the component; unmounting drops it and aborts the request.

pub mod frame;

pub use frame::{relative_to, viewport_for_box, Frame, LabelBox, SvgNode, ROOT_STYLE};

#[cfg(feature = "desktop")]
pub mod ui {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;
    use price_chart_core::types::{HEIGHT, WIDTH};
    use price_chart_core::{
        BpiClient, PointerEvent, PriceChart, RenderOptions, SeriesLoad, Theme, Viewport, BPI_HISTORICAL_CLOSE_URL,
    };
    use tracing::debug;

    use crate::frame::{relative_to, viewport_for_box, Frame, SvgNode, ROOT_STYLE};

    #[derive(Props, Clone, PartialEq)]
    pub struct PriceChartViewProps {
        /// Historical-close endpoint to load once on mount.
        #[props(default = BPI_HISTORICAL_CLOSE_URL.to_string())]
        pub endpoint: String,
        #[props(default = Theme::mint())]
        pub theme: Theme,
        /// Viewport until the first layout; the component fills its parent and
        /// the observed size takes over.
        #[props(default = WIDTH)]
        pub width: u32,
        #[props(default = HEIGHT)]
        pub height: u32,
    }

    /// Shared chart model. Mutations bump `revision` only when the frame changes.
    #[derive(Clone)]
    struct Model {
        chart: Rc<RefCell<PriceChart>>,
        revision: Signal<u64>,
    }

    impl Model {
        fn update(&mut self, f: impl FnOnce(&mut PriceChart) -> bool) {
            let changed = f(&mut self.chart.borrow_mut());
            if changed {
                *self.revision.write() += 1;
            }
        }

        fn pointer(&mut self, event: PointerEvent) {
            self.update(|c| c.handle_pointer(event));
        }
    }

    #[component]
    pub fn PriceChartView(props: PriceChartViewProps) -> Element {
        let revision = use_signal(|| 0u64);
        let model = use_hook(|| Model {
            chart: Rc::new(RefCell::new(PriceChart::new(RenderOptions {
                viewport: Viewport::new(props.width, props.height),
                theme: props.theme,
                ..RenderOptions::default()
            }))),
            revision,
        });
        let mut origin = use_signal(|| (0.0_f64, 0.0_f64));
        let mut root = use_signal(|| Option::<Rc<MountedData>>::None);

        // One load per mount. The future (and the SeriesLoad inside it) is dropped on unmount.
        let endpoint = props.endpoint.clone();
        let loader = model.clone();
        use_future(move || {
            let endpoint = endpoint.clone();
            let mut loader = loader.clone();
            async move {
                debug!(%endpoint, "price chart mounted; loading series");
                let outcome = SeriesLoad::fetch(BpiClient::with_endpoint(endpoint)).wait().await;
                loader.update(|c| {
                    c.apply_load(outcome);
                    true
                });
            }
        });

        let theme = props.theme;
        let mut themed = model.clone();
        use_effect(use_reactive!(|theme| {
            themed.update(|c| {
                if c.options().theme == theme {
                    return false;
                }
                c.set_theme(theme);
                true
            });
        }));

        // Subscribe this render to model changes.
        let _ = revision();
        let frame = model.chart.borrow().scene().map(|s| Frame::from_scene(&s));

        let mut on_resize = model.clone();
        let mut on_move = model.clone();
        let mut on_leave = model.clone();
        let mut on_touch_start = model.clone();
        let mut on_touch_move = model.clone();

        rsx! {
            div {
                class: "price-chart",
                style: ROOT_STYLE,
                onmounted: move |evt: MountedEvent| async move {
                    let node = evt.data();
                    if let Ok(rect) = node.get_client_rect().await {
                        origin.set((rect.origin.x, rect.origin.y));
                    }
                    root.set(Some(node));
                },
                onresize: move |evt: Event<ResizeData>| {
                    if let Ok(size) = evt.get_content_box_size() {
                        let viewport = viewport_for_box(size.width, size.height);
                        on_resize.update(|c| {
                            if c.options().viewport == viewport {
                                return false;
                            }
                            c.resize(viewport);
                            true
                        });
                    }
                    // Layout moved; touch points are measured from the root's client origin.
                    async move {
                        let Some(node) = root() else { return };
                        if let Ok(rect) = node.get_client_rect().await {
                            origin.set((rect.origin.x, rect.origin.y));
                        }
                    }
                },
                if let Some(frame) = frame {
                    svg {
                        style: "position:absolute; inset:0; display:block;",
                        width: "{frame.width}",
                        height: "{frame.height}",
                        view_box: "0 0 {frame.width} {frame.height}",
                        for node in frame.painted().cloned() {
                            {svg_node(node)}
                        }
                        if let Some(SvgNode::HitArea { x, y, width, height, radius }) = frame.hit_area().cloned() {
                            rect {
                                class: "hit-area",
                                x: "{x}", y: "{y}", width: "{width}", height: "{height}", rx: "{radius}",
                                fill: "transparent",
                                "pointer-events": "all",
                                onmousemove: move |evt: MouseEvent| {
                                    let p = evt.element_coordinates();
                                    on_move.pointer(PointerEvent::Move { x: p.x as f32, y: p.y as f32 });
                                },
                                onmouseleave: move |_| on_leave.pointer(PointerEvent::Leave),
                                ontouchstart: move |evt: TouchEvent| {
                                    if let Some(t) = evt.touches().first() {
                                        let c = t.client_coordinates();
                                        let (x, y) = relative_to((c.x, c.y), origin());
                                        on_touch_start.pointer(PointerEvent::TouchStart { x, y });
                                    }
                                },
                                ontouchmove: move |evt: TouchEvent| {
                                    evt.prevent_default();
                                    if let Some(t) = evt.touches().first() {
                                        let c = t.client_coordinates();
                                        let (x, y) = relative_to((c.x, c.y), origin());
                                        on_touch_move.pointer(PointerEvent::TouchMove { x, y });
                                    }
                                },
                            }
                        }
                    }
                    for label in frame.labels.iter().cloned() {
                        div { class: label.class, style: "{label.style}", "{label.text}" }
                    }
                }
            }
        }
    }

    fn svg_node(node: SvgNode) -> Element {
        match node {
            SvgNode::Rect { x, y, width, height, fill } => rsx! {
                rect { x: "{x}", y: "{y}", width: "{width}", height: "{height}", fill: "{fill}" }
            },
            SvgNode::Path { d, stroke, stroke_width } => rsx! {
                path {
                    class: "price-line",
                    d: "{d}",
                    fill: "transparent",
                    stroke: "{stroke}",
                    "stroke-width": "{stroke_width}",
                    "stroke-linejoin": "round",
                    "stroke-linecap": "round",
                }
            },
            SvgNode::Line { x1, y1, x2, y2, stroke, stroke_width, dasharray } => rsx! {
                line {
                    x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}",
                    stroke: "{stroke}",
                    "stroke-width": "{stroke_width}",
                    "stroke-dasharray": dasharray,
                    "pointer-events": "none",
                }
            },
            SvgNode::Circle { cx, cy, r, fill, stroke, stroke_width } => rsx! {
                circle {
                    cx: "{cx}", cy: "{cy}", r: "{r}",
                    fill: "{fill}",
                    stroke: "{stroke}",
                    "stroke-width": "{stroke_width}",
                    "pointer-events": "none",
                }
            },
            // Rendered by the component with its input handlers attached.
            SvgNode::HitArea { .. } => rsx! {},
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { super::ui::PriceChartView { theme: Theme::mint() } }
        }

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "price_chart_dioxus=debug,price_chart_core=debug,info".into());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| e.to_string())?;

        let cfg = dioxus_desktop::Config::new()
            .with_prerendered("<style>html,body,#main{margin:0;width:100%;height:100%}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("price-chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
