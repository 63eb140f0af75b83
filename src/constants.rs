/// Application-wide constants for the icon palette and the appiconset size table

pub mod palette {
    use image::Rgb;

    /// Sea green background (health theme)
    pub const BACKGROUND: Rgb<u8> = Rgb([0x2E, 0x8B, 0x57]);

    /// White cross glyph
    pub const CROSS: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

    /// Darker green border stroke
    pub const BORDER: Rgb<u8> = Rgb([0x1F, 0x5F, 0x3F]);
}

pub mod sizes {
    /// Required icon sizes for iOS App Store submission, in the order the
    /// appiconset expects them: (edge length in pixels, file name).
    pub const ICON_SIZES: [(u32, &str); 17] = [
        (40, "icon_20pt@2x.png"),      // 20pt@2x
        (60, "icon_20pt@3x.png"),      // 20pt@3x
        (58, "icon_29pt@2x.png"),      // 29pt@2x
        (87, "icon_29pt@3x.png"),      // 29pt@3x
        (80, "icon_40pt@2x.png"),      // 40pt@2x
        (120, "icon_40pt@3x.png"),     // 40pt@3x
        (120, "icon_60pt@2x.png"),     // 60pt@2x (iPhone app icon)
        (180, "icon_60pt@3x.png"),     // 60pt@3x (iPhone app icon)
        (20, "icon_20pt.png"),         // 20pt iPad
        (40, "icon_20pt@2x_ipad.png"), // 20pt@2x iPad
        (29, "icon_29pt.png"),         // 29pt iPad
        (58, "icon_29pt@2x_ipad.png"), // 29pt@2x iPad
        (40, "icon_40pt.png"),         // 40pt iPad
        (80, "icon_40pt@2x_ipad.png"), // 40pt@2x iPad
        (152, "icon_76pt@2x.png"),     // 76pt@2x iPad
        (167, "icon_83.5pt@2x.png"),   // 83.5pt@2x iPad Pro
        (1024, "icon_1024pt.png"),     // App Store
    ];
}
