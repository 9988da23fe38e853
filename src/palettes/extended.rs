//! Named presets for vegetation index imagery.

use crate::gradient::StopRow;

/// Black to white in a single segment. The legacy table had a crimson first end
/// color and a zero-width stop at 1.0, so its output differs from this one.
pub const GREYSCALE: &[StopRow] = &[(0.0, [0, 0, 0], [255, 255, 255])];

pub const BLUWHTGRNGIS: &[StopRow] = &[
    (0.0, [6, 23, 86], [6, 25, 84]),
    (0.0625, [6, 25, 84], [6, 25, 84]),
    (0.125, [6, 25, 84], [6, 25, 84]),
    (0.1875, [6, 25, 84], [6, 25, 84]),
    (0.25, [6, 25, 84], [6, 25, 84]),
    (0.3125, [6, 25, 84], [9, 24, 84]),
    (0.3438, [9, 24, 84], [119, 120, 162]),
    (0.375, [119, 129, 162], [249, 250, 251]),
    (0.406, [249, 250, 251], [255, 255, 255]),
    (0.4375, [255, 255, 255], [255, 255, 255]),
    (0.5, [255, 255, 255], [214, 205, 191]),
    (0.52, [214, 205, 191], [178, 175, 96]),
    (0.5625, [178, 175, 96], [151, 176, 53]),
    (0.593, [151, 176, 53], [146, 188, 12]),
    (0.625, [146, 188, 12], [96, 161, 1]),
    (0.6875, [96, 161, 1], [30, 127, 3]),
    (0.75, [30, 127, 3], [0, 99, 1]),
    (0.8125, [0, 99, 1], [0, 74, 1]),
    (0.875, [0, 74, 1], [0, 52, 0]),
    (0.9375, [0, 52, 0], [0, 34, 0]),
    (0.968, [0, 34, 0], [68, 70, 67]),
];

pub const BRNTOGRN: &[StopRow] = &[
    (0.0, [110, 12, 3], [118, 6, 1]),
    (0.0625, [118, 6, 1], [141, 19, 6]),
    (0.125, [141, 19, 6], [165, 35, 13]),
    (0.1875, [165, 35, 13], [177, 59, 25]),
    (0.2188, [177, 59, 25], [192, 91, 36]),
    (0.25, [192, 91, 36], [214, 145, 76]),
    (0.3125, [214, 145, 76], [230, 183, 134]),
    (0.375, [230, 183, 134], [243, 224, 194]),
    (0.4375, [243, 224, 194], [250, 252, 229]),
    (0.5, [250, 252, 229], [217, 235, 185]),
    (0.5625, [217, 235, 185], [184, 218, 143]),
    (0.625, [184, 218, 143], [141, 202, 89]),
    (0.6875, [141, 202, 89], [80, 176, 61]),
    (0.75, [80, 176, 61], [0, 147, 32]),
    (0.8125, [0, 147, 32], [1, 122, 22]),
    (0.875, [1, 122, 22], [0, 114, 19]),
    (0.9, [0, 114, 19], [0, 105, 18]),
    (0.9375, [0, 105, 18], [7, 70, 14]),
];

pub const BLUTOREDJET: &[StopRow] = &[
    (0.0, [0, 0, 140], [1, 1, 186]),
    (0.0625, [1, 1, 186], [0, 1, 248]),
    (0.125, [0, 1, 248], [0, 70, 254]),
    (0.1875, [0, 70, 254], [0, 130, 255]),
    (0.25, [0, 130, 255], [2, 160, 255]),
    (0.2813, [2, 160, 255], [0, 187, 255]),
    (0.3125, [0, 187, 255], [6, 250, 255]),
    (0.375, [8, 252, 251], [27, 254, 228]),
    (0.406, [27, 254, 228], [70, 255, 187]),
    (0.4375, [70, 255, 187], [104, 254, 151]),
    (0.47, [104, 254, 151], [132, 255, 19]),
    (0.5, [132, 255, 19], [195, 255, 60]),
    (0.5625, [195, 255, 60], [231, 254, 25]),
    (0.5976, [231, 254, 25], [253, 246, 1]),
    (0.625, [253, 246, 1], [252, 210, 1]),
    (0.657, [252, 210, 1], [255, 183, 0]),
    (0.6875, [255, 183, 0], [255, 125, 2]),
    (0.75, [255, 125, 2], [255, 65, 1]),
    (0.8125, [255, 65, 1], [247, 1, 1]),
    (0.875, [247, 1, 1], [200, 1, 3]),
    (0.9375, [200, 1, 3], [122, 3, 2]),
];

/// Sixteen flat bands.
pub const COLORS16: &[StopRow] = &[
    (0.0, [0, 0, 0], [0, 0, 0]),
    (0.0625, [3, 1, 172], [3, 1, 172]),
    (0.125, [3, 1, 222], [3, 1, 222]),
    (0.1875, [0, 111, 255], [0, 111, 255]),
    (0.25, [3, 172, 255], [3, 172, 255]),
    (0.3125, [1, 226, 255], [1, 226, 255]),
    (0.375, [2, 255, 0], [2, 255, 0]),
    (0.4375, [198, 254, 0], [190, 254, 0]),
    (0.5, [252, 255, 0], [252, 255, 0]),
    (0.5625, [255, 223, 3], [255, 223, 3]),
    (0.625, [255, 143, 3], [255, 143, 3]),
    (0.6875, [255, 95, 3], [255, 95, 3]),
    (0.75, [242, 0, 1], [242, 0, 1]),
    (0.8125, [245, 0, 170], [245, 0, 170]),
    (0.875, [223, 180, 225], [223, 180, 225]),
    (0.9375, [255, 255, 255], [255, 255, 255]),
];

/// The classic NDVI palette: greys for water and bare ground, then blue,
/// green, yellow and red for increasingly dense vegetation.
pub const FASTIE: &[StopRow] = &[
    (0.0, [255, 255, 255], [0, 0, 0]),
    (0.167, [0, 0, 0], [255, 255, 255]),
    (0.33, [255, 255, 255], [0, 0, 0]),
    (0.5, [0, 0, 0], [140, 140, 255]),
    (0.55, [140, 140, 255], [0, 255, 0]),
    (0.63, [0, 255, 0], [255, 255, 0]),
    (0.75, [255, 255, 0], [255, 0, 0]),
    (0.95, [255, 0, 0], [255, 0, 255]),
];

pub const STRETCHED: &[StopRow] = &[
    (0.0, [0, 0, 255], [0, 0, 255]),
    (0.1, [0, 0, 255], [38, 195, 195]),
    (0.5, [0, 150, 0], [255, 255, 0]),
    (0.7, [255, 255, 0], [255, 50, 50]),
    (0.9, [255, 50, 50], [255, 50, 50]),
];
