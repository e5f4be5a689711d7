#![allow(non_snake_case)]

use ui::App;

fn main() {
    dioxus::LaunchBuilder::desktop().launch(App);
}
