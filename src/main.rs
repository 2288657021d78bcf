use log::info;

mod config;
mod error;
mod site;
mod dom {
    pub mod page;
    pub mod browser;
    pub mod listener;
    #[cfg(test)]
    pub mod fake;
}
mod observe {
    pub mod one_shot;
    pub mod intersection;
}
mod behaviors {
    pub mod navbar;
    pub mod mobile_menu;
    pub mod anchor_scroll;
    pub mod survey_form;
    pub mod reveal;
    pub mod lazy_images;
    pub mod background;
}
mod components {
    pub mod acknowledgement;
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site behaviors");
    site::run_when_ready();
}
