use crate::gradient::StopRow;

/// Blue through green to red, the fallback for unset or unknown colormaps.
pub const DEFAULT: &[StopRow] = &[
    (0.0, [45, 1, 121], [25, 1, 137]),
    (0.125, [25, 1, 137], [0, 6, 156]),
    (0.1875, [0, 6, 156], [7, 41, 172]),
    (0.25, [7, 41, 172], [22, 84, 187]),
    (0.3125, [22, 84, 187], [25, 125, 194]),
    (0.375, [25, 125, 194], [26, 177, 197]),
    (0.4375, [26, 177, 197], [23, 199, 193]),
    (0.47, [23, 199, 193], [25, 200, 170]),
    (0.5, [25, 200, 170], [21, 209, 27]),
    (0.5625, [21, 209, 27], [108, 215, 18]),
    (0.625, [108, 215, 18], [166, 218, 19]),
    (0.6875, [166, 218, 19], [206, 221, 20]),
    (0.75, [206, 221, 20], [222, 213, 19]),
    (0.7813, [222, 213, 19], [222, 191, 19]),
    (0.8125, [222, 191, 19], [227, 133, 17]),
    (0.875, [227, 133, 17], [231, 83, 16]),
    (0.9375, [231, 83, 16], [220, 61, 48]),
];
