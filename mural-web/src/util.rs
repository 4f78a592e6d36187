#[cfg(target_arch = "wasm32")]
mod js {
    use std::str::FromStr;

    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(inline_js = "
        export function get_timezone() {
            return Intl.DateTimeFormat().resolvedOptions().timeZone;
        }
    ")]
    extern "C" {
        fn get_timezone() -> String;
    }

    lazy_static::lazy_static! {
        pub static ref LOCAL_TZ: chrono_tz::Tz = {
            chrono_tz::Tz::from_str(&get_timezone())
                .expect("host js timezone is not in chrono-tz database")
        };
    }
}

#[cfg(target_arch = "wasm32")]
pub fn local_tz() -> chrono_tz::Tz {
    *js::LOCAL_TZ
}

// No js host to ask outside of the browser, eg. when prerendering
#[cfg(not(target_arch = "wasm32"))]
pub fn local_tz() -> chrono_tz::Tz {
    chrono_tz::UTC
}
