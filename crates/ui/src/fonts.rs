//! CJK glyph support for egui.
//!
//! egui's bundled fonts carry no CJK glyphs, so station names would render
//! as tofu boxes. At startup we probe a few well-known system font paths and
//! append the first hit to the fallback chain of both font families.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use std::sync::Arc;

/// Probe order: Traditional-Chinese-capable fonts first.
const FONT_CANDIDATES: &[&str] = &[
    // Debian/Ubuntu Noto packages
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJKtc-Regular.otf",
    // Fedora/Arch
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    // Windows: JhengHei (Traditional), then YaHei
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

pub fn install_cjk_fonts(mut contexts: EguiContexts) {
    let Some((path, bytes)) = FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        warn!("no CJK system font found; station names will render as boxes");
        return;
    };
    info!("CJK glyphs from {path}");

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        if let Some(list) = fonts.families.get_mut(&family) {
            list.push("cjk".to_owned());
        }
    }
    contexts.ctx_mut().set_fonts(fonts);
}
