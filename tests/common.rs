use csv::ReaderBuilder;
use theodolite::{
    Decoder, Error,
    factory::{
        Coord,
        owned::{Geometry, LineString, OwnedFactory, Point, Polygon},
    },
};

const PATH: &str = "fixtures/records.csv";

#[test]
fn decode_fixture_records() {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(PATH).unwrap();

    let mut count = 0;

    for record in reader.records() {
        let record = record.unwrap();
        let (name, dialect, hex, expected) = (&record[0], &record[1], &record[2], &record[3]);

        let decoder = decoder(dialect);
        let found = match decoder.decode_hex(hex) {
            Ok(geometry) => describe(&geometry),
            Err(err) => format!("error: {}", error_name(&err)),
        };

        assert_eq!(found, expected, "fixture `{name}`");
        count += 1;
    }

    assert!(count > 0);
}

#[test]
fn decode_fixture_records_as_binary() {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(PATH).unwrap();

    for record in reader.records() {
        let record = record.unwrap();
        let (name, dialect, hex, expected) = (&record[0], &record[1], &record[2], &record[3]);

        let bytes = hex::decode(hex).unwrap();
        let decoder = decoder(dialect);

        let found = match decoder.decode(&bytes) {
            Ok(geometry) => describe(&geometry),
            Err(err) => format!("error: {}", error_name(&err)),
        };
        assert_eq!(found, expected, "fixture `{name}`");

        let detected = match decoder.decode_detect(&bytes) {
            Ok(geometry) => describe(&geometry),
            Err(err) => format!("error: {}", error_name(&err)),
        };
        assert_eq!(detected, expected, "fixture `{name}` (detected)");
    }
}

fn decoder(dialect: &str) -> Decoder<OwnedFactory> {
    let mut decoder = Decoder::new(OwnedFactory::default());

    for flag in dialect.split_whitespace() {
        decoder = match flag {
            "ewkb" => decoder.extended_type_codes(true),
            "iso" => decoder.numeric_suffix_type_codes(true),
            "trailing" => decoder.ignore_trailing_bytes(true),
            _ => panic!("unknown fixture flag `{flag}`"),
        };
    }

    decoder
}

fn error_name(err: &Error) -> &'static str {
    match err {
        Error::TruncatedInput { .. } => "TruncatedInput",
        Error::InvalidHexInput { .. } => "InvalidHexInput",
        Error::UnknownTypeCode { .. } => "UnknownTypeCode",
        Error::UnsupportedTypeCode { .. } => "UnsupportedTypeCode",
        Error::TypeMismatch { .. } => "TypeMismatch",
        Error::DimensionalityMismatch { .. } => "DimensionalityMismatch",
        Error::SridMismatch { .. } => "SridMismatch",
        Error::UnsupportedCapability { .. } => "UnsupportedCapability",
        Error::TrailingData { .. } => "TrailingData",
        Error::NestingTooDeep { .. } => "NestingTooDeep",
    }
}

fn describe(geometry: &Geometry) -> String {
    match geometry {
        Geometry::Point(point) => describe_point(point),
        Geometry::LineString(line_string) => describe_line_string(line_string),
        Geometry::Polygon(polygon) => describe_polygon(polygon),
        Geometry::MultiPoint(members) => list("MultiPoint", members.iter().map(describe_point)),
        Geometry::MultiLineString(members) => list(
            "MultiLineString",
            members.iter().map(describe_line_string),
        ),
        Geometry::MultiPolygon(members) => {
            list("MultiPolygon", members.iter().map(describe_polygon))
        }
        Geometry::GeometryCollection(members) => {
            list("GeometryCollection", members.iter().map(describe))
        }
    }
}

fn list(kind: &str, members: impl Iterator<Item = String>) -> String {
    format!("{kind}[{}]", members.collect::<Vec<_>>().join(", "))
}

fn describe_point(Point(coord): &Point) -> String {
    format!("Point({})", describe_coord(coord))
}

fn describe_line_string(line_string: &LineString) -> String {
    format!("LineString({})", describe_ring(line_string))
}

fn describe_polygon(polygon: &Polygon) -> String {
    let rings: Vec<_> = std::iter::once(&polygon.exterior)
        .chain(&polygon.interiors)
        .map(|ring| format!("({})", describe_ring(ring)))
        .collect();

    format!("Polygon({})", rings.join(", "))
}

fn describe_ring(LineString(points): &LineString) -> String {
    points
        .iter()
        .map(|Point(coord)| describe_coord(coord))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_coord(coord: &Coord) -> String {
    let mut s = format!("{} {}", coord.x, coord.y);

    if let Some(z) = coord.z {
        s.push_str(&format!(" z={z}"));
    }
    if let Some(m) = coord.m {
        s.push_str(&format!(" m={m}"));
    }

    s
}
