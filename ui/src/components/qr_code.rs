//=============================================================================
// File: src/components/qr_code.rs
//=============================================================================
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::EcLevel;
use qrcode::QrCode as QrMatrix;

#[derive(Props, Clone, PartialEq)]
pub struct QrCodeProps {
    pub data: String,
    #[props(optional)]
    pub caption: Option<String>,
}

/// Renders `data` as an inline SVG QR code. Opaque to the state core; the
/// deposit addresses it displays all fit a single static code.
#[allow(non_snake_case)]
pub fn QrCode(props: QrCodeProps) -> Element {
    match QrMatrix::with_error_correction_level(props.data.as_bytes(), EcLevel::L) {
        Ok(code) => {
            let image = code.render::<svg::Color>().min_dimensions(200, 200).build();

            rsx! {
                figure {
                    style: "margin: 0;",
                    div {
                        title: "{props.data}",
                        dangerous_inner_html: "{image}"
                    }
                    if let Some(caption_text) = &props.caption {
                        figcaption {
                            style: "text-align: center; font-size: 14px; margin-top: 8px;",
                            "{caption_text}"
                        }
                    }
                }
            }
        }
        Err(e) => rsx! {
            p {
                style: "color: red; font-family: sans-serif; font-size: 14px; border: 1px solid red; padding: 10px; border-radius: 5px;",
                "Error generating QR code: {e}"
            }
        },
    }
}
