mod components;

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting wedding invitation");
    dioxus::launch(components::app::App);
}
