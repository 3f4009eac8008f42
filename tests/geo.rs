#![cfg(feature = "geo-types")]

use geo_types::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, line_string, point, polygon,
};
use theodolite::{
    Decoder, Error,
    factory::{Ordinate, geo::GeoTypesFactory},
};

fn decoder() -> Decoder<GeoTypesFactory> {
    Decoder::new(GeoTypesFactory)
        .extended_type_codes(true)
        .numeric_suffix_type_codes(true)
}

#[test]
fn point() {
    let geometry = decoder()
        .decode_hex("000000000140240000000000004014000000000000")
        .unwrap();

    assert_eq!(geometry, Geometry::Point(point!(x: 10.0, y: 5.0)));
}

#[test]
fn polygon_with_hole() {
    // Both rings are closed in the input.
    let geometry = decoder()
        .decode_hex(concat!(
            "010300000002000000",
            "040000000000000000000000000000000000000000000000000010400000000000000000",
            "0000000000000000000000000000104000000000000000000000000000000000",
            "04000000000000000000F03F000000000000F03F0000000000000040000000000000F03F",
            "000000000000F03F0000000000000040000000000000F03F000000000000F03F",
        ))
        .unwrap();

    let expected = polygon!(
        exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 0.0, y: 4.0), (x: 0.0, y: 0.0)],
        interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 1.0, y: 2.0), (x: 1.0, y: 1.0)]],
    );

    assert_eq!(geometry, Geometry::Polygon(expected));
}

#[test]
fn empty_polygon() {
    let geometry = decoder().decode_hex("000000000300000000").unwrap();

    assert_eq!(
        geometry,
        Geometry::Polygon(Polygon::new(LineString::new(vec![]), vec![]))
    );
}

#[test]
fn multi_geometries() {
    let decoder = decoder();

    let geometry = decoder
        .decode_hex(concat!(
            "010400000002000000",
            "0101000000000000000000F03F0000000000000040",
            "000000000140080000000000004010000000000000",
        ))
        .unwrap();
    assert_eq!(
        geometry,
        Geometry::MultiPoint(MultiPoint(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]))
    );

    let geometry = decoder
        .decode_hex(concat!(
            "010500000001000000",
            "010200000002000000",
            "00000000000000000000000000000000000000000000F03F000000000000F03F",
        ))
        .unwrap();
    assert_eq!(
        geometry,
        Geometry::MultiLineString(MultiLineString(vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]
        ]))
    );

    let geometry = decoder.decode_hex("010600000000000000").unwrap();
    assert_eq!(geometry, Geometry::MultiPolygon(MultiPolygon(vec![])));
}

#[test]
fn collection() {
    let geometry = decoder()
        .decode_hex(concat!(
            "0107000020E610000002000000",
            "0101000000000000000000F03F0000000000000040",
            "0107000020E610000000000000",
        ))
        .unwrap();

    assert_eq!(
        geometry,
        Geometry::GeometryCollection(GeometryCollection(vec![
            Geometry::Point(Point::new(1.0, 2.0)),
            Geometry::GeometryCollection(GeometryCollection(vec![])),
        ]))
    );
}

#[test]
fn rejects_z_and_m() {
    let decoder = decoder();

    assert_eq!(
        decoder.decode_hex("01E9030000000000000000F03F00000000000000400000000000000840"),
        Err(Error::UnsupportedCapability {
            ordinate: Ordinate::Z
        })
    );
    assert_eq!(
        decoder.decode_hex("0101000040000000000000F03F00000000000000400000000000000840"),
        Err(Error::UnsupportedCapability {
            ordinate: Ordinate::M
        })
    );
}
