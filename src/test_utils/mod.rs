#![allow(missing_docs)]

pub(crate) mod alert;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod state;

pub(crate) use alert::must_get_alert_text;
pub(crate) use form::{assert_form_input, assert_hx_endpoint, must_get_element};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_content_type, get_header};
pub(crate) use state::{test_app_state, test_page_state};
