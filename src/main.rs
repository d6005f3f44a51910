use jersey_quiz::QuizApp;
use jersey_quiz::config::QuizConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let app = match QuizConfig::load().and_then(QuizApp::new) {
        Ok(app) => app,
        Err(e) => {
            log::error!("no se pudo arrancar el quiz: {e}");
            std::process::exit(1);
        }
    };

    let title = app.config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let app = match QuizConfig::load().and_then(QuizApp::new) {
        Ok(app) => app,
        Err(e) => {
            log::error!("no se pudo arrancar el quiz: {e}");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no hay document en esta página");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|e| e.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("no se encontró el canvas `the_canvas_id`");
                return;
            }
        };

        let start = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(app))),
            )
            .await;
        if let Err(e) = start {
            log::error!("fallo al arrancar eframe: {e:?}");
        }
    });
}
