//! Regression tests for "randomart" generation.

use hex_literal::hex;
use ssh_randomart::{END_SYMBOL, Fingerprint, START_SYMBOL};

/// Example from "The drunken bishop" paper.
const PAPER_FINGERPRINT: &str = "fc:94:b0:c1:e5:b0:98:7c:58:43:99:76:97:ee:9f:b7";
const PAPER_RANDOMART: &str = "\
+---[RSA 2048]----+
|       .=o.  .   |
|     . *+*. o    |
|      =.*..o     |
|       o + ..    |
|        S o.     |
|         o  .    |
|          .  . . |
|              o .|
|               E.|
+-----------------+";

/// Fixtures as `(fingerprint, randomart)` pairs.
const FIXTURES: &[(&str, &str)] = &[
    (
        "16:27:ac:a5:76:28:2d:36:63:1b:56:4d:eb:df:a6:48",
        "\
+-----------------+
|        .        |
|       + .       |
|      . B .      |
|     o * +       |
|    X * S        |
|   + O o . .     |
|    .   E . o    |
|       . . o     |
|        . .      |
+-----------------+",
    ),
    (
        "b6:dd:b7:1f:bc:25:31:d3:12:f4:92:1c:0b:93:5f:4b",
        "\
+-----------------+
|            o.o  |
|            .= E.|
|             .B.o|
|              .= |
|        S     = .|
|       . o .  .= |
|        . . . oo.|
|             . o+|
|              .o.|
+-----------------+",
    ),
    (
        "D4:D9:4F:D6:4E:63:41:27:2E:54:73:85:5E:06:3D:C6",
        "\
+-----------------+
|            ..B*=|
|         . + ..E*|
|        . o o.==+|
|       .     =oo.|
|        S     . .|
|                 |
|                 |
|                 |
|                 |
+-----------------+",
    ),
];

#[test]
fn regression_fixtures() {
    for (fingerprint, randomart) in FIXTURES {
        let fingerprint = fingerprint.parse::<Fingerprint>().unwrap();
        assert_eq!(&fingerprint.to_randomart(), randomart, "{fingerprint}");
    }
}

#[test]
fn paper_example() {
    let fingerprint = PAPER_FINGERPRINT.parse::<Fingerprint>().unwrap();
    let randomart = fingerprint.randomart().with_header("[RSA 2048]");
    assert_eq!(randomart.to_string(), PAPER_RANDOMART);
}

#[test]
fn openssh_sha256_example() {
    const EXAMPLE_RANDOMART: &str = "\
+--[ED25519 256]--+
|o+oO==+ o..      |
|.o++Eo+o..       |
|. +.oO.o . .     |
| . o..B.. . .    |
|  ...+ .S. o     |
|  .o. . . . .    |
|  o..    o       |
|   B      .      |
|  .o*            |
+----[SHA256]-----+";

    let fingerprint = Fingerprint::new(hex!(
        "5025222ebecf8ecf7014524c0c1c8b81cdcdaed754df8e0e814338e7064f7084"
    ))
    .unwrap();

    let randomart = fingerprint
        .randomart()
        .with_header("[ED25519 256]")
        .with_footer("[SHA256]");

    assert_eq!(randomart.to_string(), EXAMPLE_RANDOMART);
}

#[test]
fn density_saturates_in_corner() {
    // Seven bytes of `NorthWest` pile up in the top-left corner, then 0xc0
    // adds three more before stepping out of it.
    const EXPECTED: &str = "\
+-----------------+
|^....            |
| E   .           |
|      .          |
|       .         |
|        S        |
|                 |
|                 |
|                 |
|                 |
+-----------------+";

    let fingerprint = Fingerprint::new(hex!("00000000000000c0")).unwrap();
    let snapshot = fingerprint.snapshot();
    assert_eq!(snapshot.visits().get((0, 0).into()), 24);
    assert_eq!(fingerprint.to_randomart(), EXPECTED);
}

#[test]
fn walk_ending_on_start_has_no_end_marker() {
    // 0xcc = 11 00 11 00: NorthWest, SouthEast, NorthWest, SouthEast.
    const EXPECTED: &str = "\
+-----------------+
|                 |
|                 |
|                 |
|       o         |
|        S        |
|                 |
|                 |
|                 |
|                 |
+-----------------+";

    let fingerprint = "cc".parse::<Fingerprint>().unwrap();
    assert_eq!(fingerprint.to_randomart(), EXPECTED);
    assert!(!fingerprint.to_randomart().contains(END_SYMBOL));
}

#[test]
fn board_shape() {
    for (fingerprint, _) in FIXTURES {
        let art = fingerprint.parse::<Fingerprint>().unwrap().to_randomart();
        let lines = art.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "+-----------------+");
        assert_eq!(lines[10], "+-----------------+");

        for row in &lines[1..10] {
            assert_eq!(row.len(), 19);
            assert!(row.starts_with('|') && row.ends_with('|'));
        }
    }
}

#[test]
fn start_marker_in_every_frame() {
    let fingerprint = FIXTURES[0].0.parse::<Fingerprint>().unwrap();

    for frame in fingerprint.frames() {
        let center = frame.lines().nth(5).unwrap();
        assert_eq!(center.chars().nth(9), Some(START_SYMBOL));
    }
}

#[test]
fn exactly_one_end_marker_on_final_board() {
    for (fingerprint, _) in FIXTURES {
        let fingerprint = fingerprint.parse::<Fingerprint>().unwrap();
        let ends = fingerprint.to_randomart().matches(END_SYMBOL).count();
        assert_eq!(ends, 1, "{fingerprint}");
    }
}

#[test]
fn frames_stream_the_walk() {
    let fingerprint = FIXTURES[1].0.parse::<Fingerprint>().unwrap();
    let frames = fingerprint.frames().collect::<Vec<_>>();

    assert_eq!(frames.len(), 64);
    assert_eq!(frames.last(), Some(&fingerprint.to_randomart()));

    for frame in &frames[..63] {
        assert!(!frame.contains(END_SYMBOL));
    }
}

#[test]
fn snapshots_follow_the_walk() {
    let fingerprint = FIXTURES[2].0.parse::<Fingerprint>().unwrap();
    let last = fingerprint.snapshots().last().unwrap();
    assert_eq!(last, fingerprint.snapshot());
    assert_eq!(last.visits().total(), 64);
}

#[test]
fn deterministic() {
    for (fingerprint, _) in FIXTURES {
        let a = fingerprint.parse::<Fingerprint>().unwrap();
        let b = fingerprint.parse::<Fingerprint>().unwrap();
        assert!(a.frames().eq(b.frames()));
    }
}

#[test]
fn rendering_is_idempotent() {
    let fingerprint = FIXTURES[0].0.parse::<Fingerprint>().unwrap();

    for snapshot in fingerprint.snapshots() {
        let randomart = ssh_randomart::Randomart::new(snapshot);
        assert_eq!(randomart.to_string(), randomart.to_string());
    }
}
