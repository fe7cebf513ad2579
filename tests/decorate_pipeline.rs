//! End-to-end tests for the decoration pipeline.
//!
//! These drive the public API the way the card editor does: build a
//! contact, pick a style, render, and check the finished raster both
//! geometrically (decorations never touch the symbol) and semantically
//! (the symbol still decodes to the exact vCard payload).

use cosma_qr::utils::raster::decode_image;
use cosma_qr::{
    BorderSticker, CardStyle, ContactCard, Decorator, Error, FrameShape, LocalEncoder, NamedIcon,
    QrSource, RemoteGenerator, SocialLink, scan,
};
use httpmock::prelude::*;
use image::Rgba;

fn jane() -> ContactCard {
    ContactCard {
        name: "Jane Doe".to_string(),
        title: "Engineer".to_string(),
        email: "jane@example.com".to_string(),
        website: "https://jane.example".to_string(),
        socials: vec![SocialLink::new("GitHub", "https://github.com/jane")],
        ..ContactCard::default()
    }
}

#[tokio::test]
async fn test_circle_frame_example_scenario() {
    // The reference scenario: 800 px canvas, circle frame, no border,
    // no center mark.
    let card = ContactCard {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        ..ContactCard::default()
    };
    let style = CardStyle::new().with_frame(FrameShape::Circle);

    let png = Decorator::new().render_png(&card, &style, 800).await.unwrap();
    let image = decode_image(&png).unwrap();
    assert_eq!(image.dimensions(), (800, 800));

    // Frame stroke in the theme primary on the circle boundary
    assert_eq!(*image.get_pixel(400, 75), Rgba([0x00, 0x34, 0x3d, 255]));
    // White canvas outside the frame
    assert_eq!(*image.get_pixel(20, 400), Rgba([255, 255, 255, 255]));

    // The central region decodes back to the exact payload
    assert_eq!(scan::decode(&image).unwrap(), card.to_vcard());
}

#[tokio::test]
async fn test_round_trip_with_frame_and_border() {
    let card = jane();
    let style = CardStyle::new()
        .with_frame(FrameShape::Hexagon)
        .with_sticker(BorderSticker::DottedBorder);

    let image = Decorator::new()
        .with_verification(true)
        .render(&card, &style, 800)
        .await
        .unwrap();
    assert_eq!(scan::decode(&image).unwrap(), card.to_vcard());
}

#[tokio::test]
async fn test_symbol_never_touches_frame_or_border() {
    let card = jane();
    let style = CardStyle::new()
        .with_frame(FrameShape::Circle)
        .with_sticker(BorderSticker::ScallopEdge);
    let image = cosma_qr::decorate(&card, &style, 800).await.unwrap();

    // Pure black pixels come only from symbol modules; they must all
    // stay inside the central 280 px square.
    for (x, y, p) in image.enumerate_pixels() {
        if p[0] == 0 && p[1] == 0 && p[2] == 0 {
            assert!(
                (260..540).contains(&x) && (260..540).contains(&y),
                "module pixel ({x},{y}) escaped the symbol region"
            );
        }
    }

    // Accent-colored scallops never enter the symbol region
    let accent = Rgba([0x3b, 0x82, 0xf6, 255]);
    for y in 260..540 {
        for x in 260..540 {
            assert_ne!(*image.get_pixel(x, y), accent);
        }
    }
}

#[tokio::test]
async fn test_center_mark_renders_and_warns_only() {
    // Center marks are a scannability risk the caller accepts; the
    // render itself must succeed and stay deterministic.
    let card = jane();
    let style = CardStyle::new()
        .with_frame(FrameShape::Circle)
        .with_icon(NamedIcon::Rocket);

    let a = cosma_qr::decorate(&card, &style, 800).await.unwrap();
    let b = cosma_qr::decorate(&card, &style, 800).await.unwrap();
    assert_eq!(a, b);

    // The backing circle is white at the very center
    assert_eq!(a.get_pixel(400, 433)[0], 255);
}

#[tokio::test]
async fn test_data_url_export() {
    let card = jane();
    let url = Decorator::new()
        .render_data_url(&card, &CardStyle::new(), 400)
        .await
        .unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_remote_generator_success() {
    // The mock generator answers with a locally encoded symbol, standing
    // in for the public endpoint.
    let payload_symbol = LocalEncoder.encode("stand-in", 280).unwrap();
    let body = cosma_qr::utils::raster::encode_png(&payload_symbol).unwrap();

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .query_param("format", "png")
            .query_param_exists("data")
            .query_param_exists("size");
        then.status(200)
            .header("Content-Type", "image/png")
            .body(body);
    });

    let source = RemoteGenerator::with_base_url(server.url("/")).unwrap();
    let symbol = source.symbol("BEGIN:VCARD", 280).await.unwrap();
    mock.assert();
    assert!(symbol.width() >= 280);

    let image = Decorator::with_source(RemoteGenerator::with_base_url(server.url("/")).unwrap())
        .render(&jane(), &CardStyle::new().with_frame(FrameShape::Circle), 800)
        .await
        .unwrap();
    assert_eq!(image.dimensions(), (800, 800));
}

#[tokio::test]
async fn test_remote_generator_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(503);
    });

    let source = RemoteGenerator::with_base_url(server.url("/")).unwrap();
    let result = source.symbol("BEGIN:VCARD", 280).await;
    assert!(matches!(result, Err(Error::QrGeneration { .. })));
}

#[tokio::test]
async fn test_remote_generator_bad_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("this is not a png");
    });

    let source = RemoteGenerator::with_base_url(server.url("/")).unwrap();
    let result = source.symbol("BEGIN:VCARD", 280).await;
    assert!(matches!(result, Err(Error::QrGeneration { .. })));
}

#[tokio::test]
async fn test_every_style_combination_renders() {
    // A coarse sweep: every frame with a rotating border choice must
    // produce a canvas without panicking, at both size extremes.
    let card = jane();
    let frames = [
        FrameShape::None,
        FrameShape::Circle,
        FrameShape::Diamond,
        FrameShape::Hexagon,
        FrameShape::Star,
        FrameShape::Pentagon,
        FrameShape::RoundedSquare,
        FrameShape::Badge,
        FrameShape::Octagon,
        FrameShape::Shield,
    ];
    let stickers = [
        BorderSticker::None,
        BorderSticker::Wreath,
        BorderSticker::FlowerBorder,
        BorderSticker::VintageFrame,
        BorderSticker::RibbonBadge,
        BorderSticker::LaurelWreath,
        BorderSticker::Sunburst,
        BorderSticker::DottedBorder,
        BorderSticker::ScallopEdge,
        BorderSticker::Geometric,
    ];

    for (i, &frame) in frames.iter().enumerate() {
        let sticker = stickers[i % stickers.len()];
        let style = CardStyle::new().with_frame(frame).with_sticker(sticker);
        for size in [200, 2000] {
            let image = cosma_qr::decorate(&card, &style, size).await.unwrap();
            assert_eq!(image.dimensions(), (size, size));
        }
    }
}
