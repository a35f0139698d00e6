use super::*;
use std::path::PathBuf;

fn frame(width: u32, height: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: rgba.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 2,
        fps: Fps::new(30, 1).unwrap(),
    }
}

#[test]
fn in_memory_sink_records_config_and_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(4, 2, [1, 2, 3, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &frame(4, 2, [4, 5, 6, 255]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg()));
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.frames()[1].0, FrameIndex(1));
    assert!(sink.is_ended());

    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
}

#[test]
fn png_sequence_writes_numbered_files() {
    let dir = PathBuf::from("target").join("unit_png_sequence");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(4, 2, [0, 0, 0, 0]))
        .unwrap();
    sink.push_frame(FrameIndex(7), &frame(4, 2, [64, 32, 0, 128]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    let last = dir.join("frame_000007.png");
    assert_eq!(sink.written()[1], last);

    let img = image::open(&last).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    // Written un-premultiplied.
    assert_eq!(img.get_pixel(0, 0).0, [128, 64, 0, 128]);
}

#[test]
fn write_png_rejects_empty_frames() {
    let empty = FrameRGBA {
        width: 0,
        height: 3,
        data: Vec::new(),
        premultiplied: true,
    };
    assert!(write_png(&PathBuf::from("target").join("never.png"), &empty).is_err());
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(PngSequenceSink::file_name(FrameIndex(42)), "frame_000042.png");
}
