// SPDX-License-Identifier: MPL-2.0
//! `tinymce-widget` embeds the TinyMCE 4 rich-text editor into a web
//! application's form-rendering pipeline.
//!
//! The crate derives an editor configuration from host locale data, merges it
//! with static defaults and per-field overrides (later layers win per key),
//! and renders the `<textarea>`/`<div>` element plus the `<script>` block
//! that initializes the editor client-side. Spellchecker languages are mapped
//! against the dictionary list of an external spellchecking engine.

#![doc(html_root_url = "https://docs.rs/tinymce-widget/0.3.0")]

pub mod config;
pub mod editor_config;
pub mod error;
pub mod html;
pub mod i18n;
pub mod templates;
pub mod urls;
pub mod widget;
