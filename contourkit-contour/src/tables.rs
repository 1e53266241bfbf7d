//! Case tables for the synchronized templates contourers.
//!
//! The 3D cube index is 13 bits wide: bit 12 is the above/below state of the
//! cube's minimum corner and bits 0..=11 flag which of the twelve template
//! edges carry an intersection. [`CASE_START`] maps the index to the first
//! entry of its triangle run in [`CASE_TRIANGLES`]. A run is a sequence of
//! edge-offset slots, three per triangle, terminated by `-1`. Index 0 of
//! [`CASE_TRIANGLES`] is a lone terminator shared by every empty case.

/// Number of distinct 3D cube indices.
pub const CASE_COUNT: usize = 8192;

/// Terminator of a triangle run.
pub const END_OF_CASE: i8 = -1;

/// Non-empty cases as `(cube index, run start)`.
const CASE_RUNS: [(u16, u16); 254] = [
    (19, 592), (37, 1312), (54, 585), (138, 260), (153, 948), (175, 935), (188, 250),
    (323, 620), (336, 16), (358, 530), (373, 1263), (457, 988), (474, 288), (492, 201),
    (511, 874), (524, 106), (543, 746), (553, 1119), (570, 404), (646, 414), (661, 1126),
    (675, 736), (688, 99), (847, 786), (860, 134), (874, 355), (889, 1064), (965, 1172),
    (982, 448), (992, 62), (1011, 687), (1093, 1211), (1110, 484), (1120, 44), (1139, 660),
    (1231, 822), (1244, 161), (1258, 328), (1273, 1028), (1286, 441), (1301, 1162), (1315, 700),
    (1328, 72), (1420, 124), (1439, 773), (1449, 1080), (1466, 368), (1609, 1018), (1626, 315),
    (1644, 174), (1663, 838), (1731, 647), (1744, 34), (1766, 494), (1781, 1218), (1802, 278),
    (1817, 975), (1839, 890), (1852, 214), (1920, 9), (1939, 610), (1957, 1276), (1974, 540),
    (2121, 1011), (2138, 305), (2156, 181), (2175, 848), (2243, 637), (2256, 27), (2278, 504),
    (2293, 1231), (2314, 271), (2329, 965), (2351, 903), (2364, 224), (2432, 5), (2451, 603),
    (2469, 1292), (2486, 553), (2629, 1201), (2646, 471), (2656, 48), (2675, 667), (2767, 809),
    (2780, 151), (2794, 335), (2809, 1038), (2822, 431), (2837, 1149), (2851, 710), (2864, 79),
    (2956, 117), (2975, 763), (2985, 1093), (3002, 378), (3084, 110), (3103, 753), (3113, 1109),
    (3130, 391), (3206, 421), (3221, 1136), (3235, 723), (3248, 89), (3407, 796), (3420, 141),
    (3434, 345), (3449, 1051), (3525, 1185), (3542, 458), (3552, 55), (3571, 677), (3584, 1),
    (3603, 596), (3621, 1299), (3638, 569), (3722, 264), (3737, 955), (3759, 919), (3772, 237),
    (3907, 627), (3920, 20), (3942, 517), (3957, 1247), (4041, 998), (4058, 295), (4076, 191),
    (4095, 861), (4115, 2036), (4133, 1316), (4150, 2040), (4234, 2404), (4249, 1641),
    (4271, 1648), (4284, 2408), (4419, 1993), (4432, 2696), (4454, 2080), (4469, 1344),
    (4553, 1592), (4570, 2361), (4588, 2460), (4607, 1688), (4620, 2594), (4639, 1837),
    (4649, 1470), (4666, 2218), (4742, 2211), (4757, 1460), (4771, 1850), (4784, 2598),
    (4943, 1776), (4956, 2557), (4970, 2270), (4985, 1510), (5061, 1411), (5078, 2168),
    (5088, 2632), (5107, 1896), (5189, 1384), (5206, 2132), (5216, 2662), (5235, 1941),
    (5327, 1740), (5340, 2512), (5354, 2315), (5369, 1546), (5382, 2184), (5397, 1424),
    (5411, 1886), (5424, 2625), (5516, 2564), (5535, 1792), (5545, 1497), (5562, 2254),
    (5705, 1562), (5722, 2322), (5740, 2499), (5759, 1724), (5827, 1954), (5840, 2666),
    (5862, 2116), (5877, 1371), (5898, 2374), (5913, 1602), (5935, 1675), (5948, 2444),
    (6016, 2700), (6035, 2000), (6053, 1334), (6070, 2067), (6217, 1572), (6234, 2335),
    (6252, 2489), (6271, 1711), (6339, 1967), (6352, 2676), (6374, 2103), (6389, 1361),
    (6410, 2384), (6425, 1615), (6447, 1665), (6460, 2431), (6528, 2707), (6547, 2016),
    (6565, 1327), (6582, 2057), (6725, 1391), (6742, 2142), (6752, 2655), (6771, 1925),
    (6863, 1750), (6876, 2525), (6890, 2299), (6905, 1533), (6918, 2191), (6933, 1434),
    (6947, 1873), (6960, 2615), (7052, 2574), (7071, 1805), (7081, 1487), (7098, 2241),
    (7180, 2587), (7199, 1821), (7209, 1477), (7226, 2228), (7302, 2201), (7317, 1447),
    (7331, 1860), (7344, 2605), (7503, 1763), (7516, 2541), (7530, 2283), (7545, 1520),
    (7621, 1401), (7638, 2155), (7648, 2642), (7667, 1909), (7680, 2711), (7699, 2029),
    (7717, 1320), (7734, 2047), (7818, 2391), (7833, 1625), (7855, 1655), (7868, 2418),
    (8003, 1977), (8016, 2683), (8038, 2090), (8053, 1351), (8137, 1579), (8154, 2345),
    (8172, 2473), (8191, 1698),
];

const fn expand_case_runs() -> [u16; CASE_COUNT] {
    let mut table = [0u16; CASE_COUNT];
    let mut n = 0;
    while n < CASE_RUNS.len() {
        let (index, start) = CASE_RUNS[n];
        table[index as usize] = start;
        n += 1;
    }
    table
}

/// First entry in [`CASE_TRIANGLES`] for each cube index.
pub static CASE_START: [u16; CASE_COUNT] = expand_case_runs();

/// Edge-offset slots of every case, `-1` terminated.
pub static CASE_TRIANGLES: [i8; 2715] = [
    -1, 0, 1, 2, -1, 0, 4, 3, -1, 3, 1, 2, 4, 3, 2, -1, 3, 7, 5, -1, 0, 1, 2, 3, 7, 5, -1, 4, 7,
    5, 0, 4, 5, -1, 5, 1, 2, 5, 2, 7, 7, 2, 4, -1, 1, 5, 6, -1, 0, 5, 6, 2, 0, 6, -1, 3, 0, 4,
    5, 6, 1, -1, 3, 5, 6, 3, 6, 4, 4, 6, 2, -1, 1, 3, 7, 6, 1, 7, -1, 0, 3, 7, 0, 7, 2, 2, 7, 6,
    -1, 1, 0, 4, 1, 4, 6, 6, 4, 7, -1, 4, 7, 2, 7, 6, 2, -1, 8, 2, 9, -1, 8, 0, 1, 9, 8, 1, -1,
    0, 4, 3, 2, 9, 8, -1, 8, 4, 3, 8, 3, 9, 9, 3, 1, -1, 3, 7, 5, 2, 9, 8, -1, 1, 9, 8, 1, 8, 0,
    3, 7, 5, -1, 4, 7, 5, 4, 5, 0, 2, 9, 8, -1, 5, 4, 7, 5, 9, 4, 5, 1, 9, 9, 8, 4, -1, 2, 9, 8,
    1, 5, 6, -1, 6, 9, 8, 6, 8, 5, 5, 8, 0, -1, 4, 3, 0, 2, 9, 8, 5, 6, 1, -1, 8, 6, 9, 4, 6, 8,
    4, 5, 6, 4, 3, 5, -1, 1, 3, 7, 1, 7, 6, 9, 8, 2, -1, 3, 7, 6, 3, 6, 8, 3, 8, 0, 9, 8, 6, -1,
    8, 2, 9, 4, 6, 0, 4, 7, 6, 6, 1, 0, -1, 8, 6, 9, 8, 4, 6, 4, 7, 6, -1, 4, 8, 10, -1, 4, 8,
    10, 0, 1, 2, -1, 0, 8, 10, 3, 0, 10, -1, 2, 8, 10, 2, 10, 1, 1, 10, 3, -1, 3, 7, 5, 4, 8,
    10, -1, 1, 2, 0, 3, 7, 5, 8, 10, 4, -1, 10, 7, 5, 10, 5, 8, 8, 5, 0, -1, 5, 10, 7, 1, 10, 5,
    1, 8, 10, 1, 2, 8, -1, 4, 8, 10, 5, 6, 1, -1, 0, 5, 6, 0, 6, 2, 8, 10, 4, -1, 0, 8, 10, 0,
    10, 3, 5, 6, 1, -1, 5, 10, 3, 5, 2, 10, 5, 6, 2, 8, 10, 2, -1, 7, 6, 1, 7, 1, 3, 4, 8, 10,
    -1, 8, 10, 4, 0, 3, 2, 2, 3, 7, 2, 7, 6, -1, 10, 0, 8, 10, 6, 0, 10, 7, 6, 6, 1, 0, -1, 10,
    2, 8, 10, 7, 2, 7, 6, 2, -1, 4, 2, 9, 10, 4, 9, -1, 4, 0, 1, 4, 1, 10, 10, 1, 9, -1, 0, 2,
    9, 0, 9, 3, 3, 9, 10, -1, 3, 1, 10, 1, 9, 10, -1, 4, 2, 9, 4, 9, 10, 7, 5, 3, -1, 7, 5, 3,
    4, 0, 10, 10, 0, 1, 10, 1, 9, -1, 2, 5, 0, 2, 10, 5, 2, 9, 10, 7, 5, 10, -1, 5, 10, 7, 5, 1,
    10, 1, 9, 10, -1, 9, 10, 4, 9, 4, 2, 1, 5, 6, -1, 4, 9, 10, 4, 5, 9, 4, 0, 5, 5, 6, 9, -1,
    5, 6, 1, 0, 2, 3, 3, 2, 9, 3, 9, 10, -1, 6, 3, 5, 6, 9, 3, 9, 10, 3, -1, 4, 2, 10, 2, 9, 10,
    7, 1, 3, 7, 6, 1, -1, 10, 0, 9, 10, 4, 0, 9, 0, 6, 3, 7, 0, 6, 0, 7, -1, 6, 0, 7, 6, 1, 0,
    7, 0, 10, 2, 9, 0, 10, 0, 9, -1, 6, 10, 7, 9, 10, 6, -1, 7, 10, 11, -1, 0, 1, 2, 10, 11, 7,
    -1, 4, 3, 0, 10, 11, 7, -1, 3, 1, 2, 3, 2, 4, 10, 11, 7, -1, 3, 10, 11, 5, 3, 11, -1, 3, 10,
    11, 3, 11, 5, 1, 2, 0, -1, 4, 10, 11, 4, 11, 0, 0, 11, 5, -1, 10, 2, 4, 10, 5, 2, 10, 11, 5,
    1, 2, 5, -1, 5, 6, 1, 7, 10, 11, -1, 6, 2, 0, 6, 0, 5, 7, 10, 11, -1, 0, 4, 3, 5, 6, 1, 10,
    11, 7, -1, 10, 11, 7, 3, 5, 4, 4, 5, 6, 4, 6, 2, -1, 11, 6, 1, 11, 1, 10, 10, 1, 3, -1, 0,
    6, 2, 0, 10, 6, 0, 3, 10, 10, 11, 6, -1, 1, 11, 6, 0, 11, 1, 0, 10, 11, 0, 4, 10, -1, 11, 4,
    10, 11, 6, 4, 6, 2, 4, -1, 10, 11, 7, 8, 2, 9, -1, 8, 0, 1, 8, 1, 9, 11, 7, 10, -1, 3, 0, 4,
    10, 11, 7, 2, 9, 8, -1, 7, 10, 11, 3, 9, 4, 3, 1, 9, 9, 8, 4, -1, 11, 5, 3, 11, 3, 10, 8, 2,
    9, -1, 3, 10, 5, 10, 11, 5, 1, 8, 0, 1, 9, 8, -1, 2, 9, 8, 4, 10, 0, 0, 10, 11, 0, 11, 5,
    -1, 9, 4, 1, 9, 8, 4, 1, 4, 5, 10, 11, 4, 5, 4, 11, -1, 1, 5, 6, 9, 8, 2, 7, 10, 11, -1, 10,
    11, 7, 8, 5, 9, 8, 0, 5, 5, 6, 9, -1, 0, 4, 3, 8, 2, 9, 5, 6, 1, 10, 11, 7, -1, 4, 3, 5, 4,
    5, 6, 4, 6, 8, 9, 8, 6, 10, 11, 7, -1, 2, 9, 8, 1, 10, 6, 1, 3, 10, 10, 11, 6, -1, 10, 6, 3,
    10, 11, 6, 3, 6, 0, 9, 8, 6, 0, 6, 8, -1, 0, 4, 10, 0, 10, 11, 0, 11, 1, 6, 1, 11, 2, 9, 8,
    -1, 11, 4, 10, 11, 6, 4, 8, 4, 9, 9, 4, 6, -1, 7, 4, 8, 11, 7, 8, -1, 8, 11, 7, 8, 7, 4, 0,
    1, 2, -1, 7, 3, 0, 7, 0, 11, 11, 0, 8, -1, 2, 3, 1, 2, 11, 3, 2, 8, 11, 11, 7, 3, -1, 3, 4,
    8, 3, 8, 5, 5, 8, 11, -1, 1, 2, 0, 3, 4, 5, 5, 4, 8, 5, 8, 11, -1, 0, 8, 5, 8, 11, 5, -1, 2,
    5, 1, 2, 8, 5, 8, 11, 5, -1, 7, 4, 8, 7, 8, 11, 6, 1, 5, -1, 0, 5, 2, 5, 6, 2, 8, 7, 4, 8,
    11, 7, -1, 1, 5, 6, 0, 11, 3, 0, 8, 11, 11, 7, 3, -1, 11, 3, 8, 11, 7, 3, 8, 3, 2, 5, 6, 3,
    2, 3, 6, -1, 4, 8, 11, 4, 11, 1, 4, 1, 3, 6, 1, 11, -1, 2, 3, 6, 2, 0, 3, 6, 3, 11, 4, 8, 3,
    11, 3, 8, -1, 1, 11, 6, 1, 0, 11, 0, 8, 11, -1, 11, 2, 8, 6, 2, 11, -1, 9, 11, 7, 9, 7, 2,
    2, 7, 4, -1, 0, 1, 9, 0, 9, 7, 0, 7, 4, 11, 7, 9, -1, 7, 9, 11, 3, 9, 7, 3, 2, 9, 3, 0, 2,
    -1, 7, 9, 11, 7, 3, 9, 3, 1, 9, -1, 3, 11, 5, 3, 2, 11, 3, 4, 2, 2, 9, 11, -1, 5, 4, 11, 5,
    3, 4, 11, 4, 9, 0, 1, 4, 9, 4, 1, -1, 9, 0, 2, 9, 11, 0, 11, 5, 0, -1, 9, 5, 1, 11, 5, 9,
    -1, 5, 6, 1, 7, 2, 11, 7, 4, 2, 2, 9, 11, -1, 5, 9, 0, 5, 6, 9, 0, 9, 4, 11, 7, 9, 4, 9, 7,
    -1, 3, 0, 2, 3, 2, 9, 3, 9, 7, 11, 7, 9, 5, 6, 1, -1, 6, 3, 5, 6, 9, 3, 7, 3, 11, 11, 3, 9,
    -1, 2, 11, 4, 2, 9, 11, 4, 11, 3, 6, 1, 11, 3, 11, 1, -1, 0, 3, 4, 6, 9, 11, -1, 9, 0, 2, 9,
    11, 0, 1, 0, 6, 6, 0, 11, -1, 9, 11, 6, -1, 9, 6, 11, -1, 1, 2, 0, 6, 11, 9, -1, 0, 4, 3, 6,
    11, 9, -1, 2, 4, 3, 2, 3, 1, 6, 11, 9, -1, 7, 5, 3, 11, 9, 6, -1, 3, 7, 5, 1, 2, 0, 11, 9,
    6, -1, 5, 0, 4, 5, 4, 7, 11, 9, 6, -1, 11, 9, 6, 5, 1, 7, 7, 1, 2, 7, 2, 4, -1, 9, 1, 5, 11,
    9, 5, -1, 9, 2, 0, 9, 0, 11, 11, 0, 5, -1, 5, 11, 9, 5, 9, 1, 0, 4, 3, -1, 3, 5, 11, 3, 11,
    2, 3, 2, 4, 2, 11, 9, -1, 7, 11, 9, 7, 9, 3, 3, 9, 1, -1, 7, 11, 9, 3, 7, 9, 3, 9, 2, 3, 2,
    0, -1, 0, 9, 1, 0, 7, 9, 0, 4, 7, 11, 9, 7, -1, 9, 7, 11, 9, 2, 7, 2, 4, 7, -1, 11, 8, 2, 6,
    11, 2, -1, 1, 6, 11, 1, 11, 0, 0, 11, 8, -1, 2, 6, 11, 2, 11, 8, 4, 3, 0, -1, 4, 11, 8, 4,
    1, 11, 4, 3, 1, 6, 11, 1, -1, 11, 8, 2, 11, 2, 6, 5, 3, 7, -1, 3, 7, 5, 1, 6, 0, 0, 6, 11,
    0, 11, 8, -1, 8, 2, 6, 8, 6, 11, 0, 4, 5, 5, 4, 7, -1, 7, 1, 4, 7, 5, 1, 4, 1, 8, 6, 11, 1,
    8, 1, 11, -1, 2, 1, 5, 2, 5, 8, 8, 5, 11, -1, 0, 5, 8, 8, 5, 11, -1, 3, 0, 4, 5, 8, 1, 5,
    11, 8, 8, 2, 1, -1, 3, 8, 4, 3, 5, 8, 5, 11, 8, -1, 2, 1, 3, 2, 3, 11, 2, 11, 8, 11, 3, 7,
    -1, 7, 0, 3, 7, 11, 0, 11, 8, 0, -1, 8, 1, 11, 8, 2, 1, 11, 1, 7, 0, 4, 1, 7, 1, 4, -1, 7,
    8, 4, 11, 8, 7, -1, 8, 10, 4, 9, 6, 11, -1, 0, 1, 2, 8, 10, 4, 6, 11, 9, -1, 10, 3, 0, 10,
    0, 8, 9, 6, 11, -1, 6, 11, 9, 2, 8, 1, 1, 8, 10, 1, 10, 3, -1, 4, 8, 10, 7, 5, 3, 9, 6, 11,
    -1, 11, 9, 6, 3, 7, 5, 0, 1, 2, 8, 10, 4, -1, 9, 6, 11, 10, 7, 8, 8, 7, 5, 8, 5, 0, -1, 1,
    2, 8, 1, 8, 10, 1, 10, 5, 7, 5, 10, 6, 11, 9, -1, 9, 1, 5, 9, 5, 11, 10, 4, 8, -1, 4, 8, 10,
    0, 11, 2, 0, 5, 11, 11, 9, 2, -1, 1, 5, 11, 1, 11, 9, 3, 0, 10, 10, 0, 8, -1, 11, 2, 5, 11,
    9, 2, 5, 2, 3, 8, 10, 2, 3, 2, 10, -1, 4, 8, 10, 7, 11, 3, 3, 11, 9, 3, 9, 1, -1, 3, 7, 11,
    3, 11, 9, 3, 9, 0, 2, 0, 9, 4, 8, 10, -1, 8, 7, 0, 8, 10, 7, 0, 7, 1, 11, 9, 7, 1, 7, 9, -1,
    9, 7, 11, 9, 2, 7, 10, 7, 8, 8, 7, 2, -1, 11, 10, 4, 11, 4, 6, 6, 4, 2, -1, 1, 6, 11, 0, 1,
    11, 0, 11, 10, 0, 10, 4, -1, 0, 2, 6, 0, 6, 10, 0, 10, 3, 10, 6, 11, -1, 11, 1, 6, 11, 10,
    1, 10, 3, 1, -1, 3, 7, 5, 4, 6, 10, 4, 2, 6, 6, 11, 10, -1, 0, 1, 6, 0, 6, 11, 0, 11, 4, 10,
    4, 11, 3, 7, 5, -1, 6, 10, 2, 6, 11, 10, 2, 10, 0, 7, 5, 10, 0, 10, 5, -1, 11, 1, 6, 11, 10,
    1, 5, 1, 7, 7, 1, 10, -1, 10, 4, 2, 10, 2, 5, 10, 5, 11, 1, 5, 2, -1, 4, 11, 10, 4, 0, 11,
    0, 5, 11, -1, 3, 2, 10, 3, 0, 2, 10, 2, 11, 1, 5, 2, 11, 2, 5, -1, 3, 11, 10, 5, 11, 3, -1,
    3, 11, 1, 3, 7, 11, 1, 11, 2, 10, 4, 11, 2, 11, 4, -1, 7, 0, 3, 7, 11, 0, 4, 0, 10, 10, 0,
    11, -1, 0, 2, 1, 10, 7, 11, -1, 7, 11, 10, -1, 6, 7, 10, 9, 6, 10, -1, 6, 7, 10, 6, 10, 9,
    2, 0, 1, -1, 10, 9, 6, 10, 6, 7, 3, 0, 4, -1, 7, 10, 9, 7, 9, 6, 4, 3, 2, 2, 3, 1, -1, 6, 5,
    3, 6, 3, 9, 9, 3, 10, -1, 0, 1, 2, 3, 9, 5, 3, 10, 9, 9, 6, 5, -1, 4, 10, 9, 4, 9, 5, 4, 5,
    0, 5, 9, 6, -1, 9, 5, 10, 9, 6, 5, 10, 5, 4, 1, 2, 5, 4, 5, 2, -1, 5, 7, 10, 5, 10, 1, 1,
    10, 9, -1, 2, 0, 5, 2, 5, 10, 2, 10, 9, 7, 10, 5, -1, 4, 3, 0, 10, 1, 7, 10, 9, 1, 1, 5, 7,
    -1, 4, 5, 2, 4, 3, 5, 2, 5, 9, 7, 10, 5, 9, 5, 10, -1, 3, 10, 1, 1, 10, 9, -1, 0, 9, 2, 0,
    3, 9, 3, 10, 9, -1, 4, 1, 0, 4, 10, 1, 10, 9, 1, -1, 4, 9, 2, 10, 9, 4, -1, 10, 8, 2, 10, 2,
    7, 7, 2, 6, -1, 10, 8, 0, 10, 0, 6, 10, 6, 7, 6, 0, 1, -1, 0, 4, 3, 2, 7, 8, 2, 6, 7, 7, 10,
    8, -1, 7, 8, 6, 7, 10, 8, 6, 8, 1, 4, 3, 8, 1, 8, 3, -1, 5, 3, 10, 5, 10, 2, 5, 2, 6, 8, 2,
    10, -1, 0, 6, 8, 0, 1, 6, 8, 6, 10, 5, 3, 6, 10, 6, 3, -1, 0, 10, 5, 0, 4, 10, 5, 10, 6, 8,
    2, 10, 6, 10, 2, -1, 4, 10, 8, 5, 1, 6, -1, 5, 7, 10, 1, 5, 10, 1, 10, 8, 1, 8, 2, -1, 10,
    5, 7, 10, 8, 5, 8, 0, 5, -1, 1, 5, 7, 1, 7, 10, 1, 10, 2, 8, 2, 10, 0, 4, 3, -1, 10, 5, 7,
    10, 8, 5, 3, 5, 4, 4, 5, 8, -1, 2, 10, 8, 2, 1, 10, 1, 3, 10, -1, 0, 10, 8, 3, 10, 0, -1, 2,
    10, 8, 2, 1, 10, 4, 10, 0, 0, 10, 1, -1, 4, 10, 8, -1, 8, 9, 6, 8, 6, 4, 4, 6, 7, -1, 0, 1,
    2, 8, 9, 4, 4, 9, 6, 4, 6, 7, -1, 3, 6, 7, 3, 8, 6, 3, 0, 8, 9, 6, 8, -1, 1, 8, 3, 1, 2, 8,
    3, 8, 7, 9, 6, 8, 7, 8, 6, -1, 8, 9, 6, 4, 8, 6, 4, 6, 5, 4, 5, 3, -1, 4, 8, 9, 4, 9, 6, 4,
    6, 3, 5, 3, 6, 0, 1, 2, -1, 6, 8, 9, 6, 5, 8, 5, 0, 8, -1, 6, 8, 9, 6, 5, 8, 2, 8, 1, 1, 8,
    5, -1, 5, 7, 4, 5, 4, 9, 5, 9, 1, 9, 4, 8, -1, 4, 9, 7, 4, 8, 9, 7, 9, 5, 2, 0, 9, 5, 9, 0,
    -1, 1, 7, 9, 1, 5, 7, 9, 7, 8, 3, 0, 7, 8, 7, 0, -1, 3, 5, 7, 2, 8, 9, -1, 8, 3, 4, 8, 9, 3,
    9, 1, 3, -1, 8, 3, 4, 8, 9, 3, 0, 3, 2, 2, 3, 9, -1, 8, 1, 0, 9, 1, 8, -1, 8, 9, 2, -1, 4,
    2, 7, 7, 2, 6, -1, 1, 4, 0, 1, 6, 4, 6, 7, 4, -1, 0, 7, 3, 0, 2, 7, 2, 6, 7, -1, 1, 7, 3, 6,
    7, 1, -1, 3, 6, 5, 3, 4, 6, 4, 2, 6, -1, 1, 4, 0, 1, 6, 4, 3, 4, 5, 5, 4, 6, -1, 0, 6, 5, 2,
    6, 0, -1, 1, 6, 5, -1, 5, 2, 1, 5, 7, 2, 7, 4, 2, -1, 4, 5, 7, 0, 5, 4, -1, 5, 2, 1, 5, 7,
    2, 0, 2, 3, 3, 2, 7, -1, 3, 5, 7, -1, 3, 2, 1, 4, 2, 3, -1, 0, 3, 4, -1, 0, 2, 1, -1,
];

/// Line segments of a square cell, keyed by the corners at or above the
/// iso-value (bit 0 for the minimum corner, then counter-clockwise).
///
/// Edges are numbered 0 bottom, 1 right, 2 top and 3 left. The ambiguous
/// saddle cases 5 and 10 keep the two above-value corners apart.
pub static LINE_CASES: [&[[usize; 2]]; 16] = [
    &[],
    &[[0, 3]],
    &[[1, 0]],
    &[[1, 3]],
    &[[2, 1]],
    &[[0, 3], [2, 1]],
    &[[2, 0]],
    &[[2, 3]],
    &[[3, 2]],
    &[[0, 2]],
    &[[1, 0], [3, 2]],
    &[[1, 2]],
    &[[3, 1]],
    &[[0, 1]],
    &[[3, 0]],
    &[],
];
