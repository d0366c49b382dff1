mod components;

use dioxus::logger::tracing::Level;

use components::app::App;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}
