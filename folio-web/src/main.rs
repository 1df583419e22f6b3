use folio_web::{logging, App};

fn main() {
    dioxus::logger::init(logging::level(option_env!("FOLIO_LOG")))
        .expect("Failed to initialize logger");
    dioxus::launch(App);
}
