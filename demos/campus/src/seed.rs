//! Embedded campus seed.
//!
//! A small walking map of a university campus in Akoka, Lagos.  Weights are
//! walking minutes; coordinates are approximate.  `Lagoon Jetty` has a
//! coordinate but no path, so it is unreachable in edge-list mode and
//! dropped in proximity mode.

pub const CAMPUS_SEED: &str = r#"{
    "nodes": [
        "Main Gate",
        "Security Post",
        "Administrative Block",
        "Senate Building",
        "University Library",
        "Health Centre",
        "Faculty of Science",
        "Faculty of Engineering",
        "Faculty of Arts",
        "Sports Complex",
        "Multipurpose Hall",
        "New Hall (Female Hostel)",
        "Jaja Hall (Male Hostel)",
        "Lagoon Jetty"
    ],
    "edges": [
        ["Main Gate", "Security Post", 2],
        ["Main Gate", "Faculty of Science", 6],
        ["Security Post", "Administrative Block", 4],
        ["Administrative Block", "Senate Building", 2],
        ["Senate Building", "University Library", 3],
        ["Administrative Block", "Health Centre", 5],
        ["Health Centre", "Faculty of Science", 4],
        ["Faculty of Science", "Faculty of Engineering", 5],
        ["University Library", "Faculty of Arts", 4],
        ["University Library", "Multipurpose Hall", 2],
        ["Faculty of Arts", "Faculty of Engineering", 6],
        ["Multipurpose Hall", "Sports Complex", 5],
        ["Sports Complex", "New Hall (Female Hostel)", 4],
        ["New Hall (Female Hostel)", "Jaja Hall (Male Hostel)", 3],
        ["Jaja Hall (Male Hostel)", "Faculty of Engineering", 7]
    ],
    "coordinates": {
        "Main Gate":                [6.5158, 3.3966],
        "Security Post":            [6.5162, 3.3960],
        "Administrative Block":     [6.5169, 3.3944],
        "Senate Building":          [6.5171, 3.3945],
        "University Library":       [6.5176, 3.3941],
        "Health Centre":            [6.5167, 3.3941],
        "Faculty of Science":       [6.5150, 3.3985],
        "Faculty of Engineering":   [6.5190, 3.3990],
        "Faculty of Arts":          [6.5185, 3.3950],
        "Sports Complex":           [6.5201, 3.3923],
        "Multipurpose Hall":        [6.5178, 3.3940],
        "New Hall (Female Hostel)": [6.5209, 3.3978],
        "Jaja Hall (Male Hostel)":  [6.5233, 3.4002],
        "Lagoon Jetty":             [6.5350, 3.4150]
    }
}"#;
