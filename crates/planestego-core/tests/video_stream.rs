use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use planestego_core::commands::{hide, unveil, unveil_raw};
use planestego_core::media::video::{FrameSequence, FrameSequenceWriter};
use planestego_core::*;

/// writes `count` frames of 6x8 pixels, each frame with its own blue level
fn prepare_frames(dir: &Path, count: u8) -> PathBuf {
    let frames_dir = dir.join("frames");
    let mut writer = FrameSequenceWriter::create(&frames_dir).expect("Failed to create frames dir");
    for i in 0..count {
        let frame = FramePlane::from_fn(6, 8, |row, col| [i * 10, row as u8, col as u8]);
        writer.write_frame(&frame).expect("Failed to write frame");
    }
    frames_dir
}

#[test]
fn should_hide_in_every_frame_and_unveil_all_copies() -> Result<()> {
    let out_dir = TempDir::new()?;
    let frames = prepare_frames(out_dir.path(), 3);
    let secret = out_dir.path().join("secret-frames");

    let report = hide(&frames, &secret, "hi", CodecOptions::default())?;

    assert_eq!(report.frames, 3);
    assert_eq!(report.skipped, 0);
    assert_eq!(unveil(&secret, false, CodecOptions::default())?, "hi hi hi");
    assert_eq!(unveil(&secret, true, CodecOptions::default())?, "hi");

    let carrier = ImageCarrier::default();
    for frame in FrameSequence::open(&secret)?.frames() {
        assert_eq!(carrier.extract(&frame?)?, "hi");
    }

    Ok(())
}

#[test]
fn should_skip_a_broken_frame() -> Result<()> {
    let out_dir = TempDir::new()?;
    let frames = prepare_frames(out_dir.path(), 3);
    fs::write(frames.join("frame_000001.png"), b"definitely not a png")?;
    let secret = out_dir.path().join("secret-frames");

    let report = hide(&frames, &secret, "hi", CodecOptions::default())?;

    assert_eq!(report.frames, 2);
    assert_eq!(report.skipped, 1);
    let written = FrameSequence::open(&secret)?;
    assert_eq!(written.len(), 2);

    // frame 1 and 3 of the source, in order
    let blue_levels: Vec<u8> = written
        .frames()
        .map(|f| f.map(|f| f.channel_plane(Channel::Blue).samples()[0]))
        .collect::<Result<_>>()?;
    assert_eq!(blue_levels, vec![0, 20]);
    assert_eq!(unveil(&secret, false, CodecOptions::default())?, "hi hi");

    Ok(())
}

#[test]
fn should_fail_on_frames_of_different_sizes() -> Result<()> {
    let out_dir = TempDir::new()?;
    let frames = prepare_frames(out_dir.path(), 2);
    let mut writer = FrameSequenceWriter::create(&out_dir.path().join("odd"))?;
    writer.write_frame(&FramePlane::from_fn(3, 3, |_, _| [0, 0, 0]))?;
    fs::rename(
        out_dir.path().join("odd").join("frame_000000.png"),
        frames.join("frame_000002.png"),
    )?;

    let result = hide(
        &frames,
        &out_dir.path().join("secret-frames"),
        "hi",
        CodecOptions::default(),
    );

    match result {
        Err(PlaneStegoError::DimensionMismatch { expected, actual }) => {
            assert_eq!(expected, (6, 8));
            assert_eq!(actual, (3, 3));
        }
        other => panic!("unexpected result {other:?}"),
    }

    Ok(())
}

#[test]
fn should_not_mix_frames_of_an_earlier_run_into_the_output() -> Result<()> {
    let out_dir = TempDir::new()?;
    let many = prepare_frames(out_dir.path(), 5);
    let secret = out_dir.path().join("secret-frames");
    hide(&many, &secret, "old", CodecOptions::default())?;

    let few = out_dir.path().join("few");
    fs::create_dir(&few)?;
    for name in ["frame_000000.png", "frame_000001.png"] {
        fs::copy(many.join(name), few.join(name))?;
    }
    let result = hide(&few, &secret, "new", CodecOptions::default());

    assert!(matches!(result, Err(PlaneStegoError::TargetNotEmpty(_))));
    assert_eq!(
        unveil(&secret, false, CodecOptions::default())?,
        "old old old old old"
    );

    let fresh = out_dir.path().join("secret-frames-2");
    hide(&few, &fresh, "new", CodecOptions::default())?;
    assert_eq!(unveil(&fresh, false, CodecOptions::default())?, "new new");

    Ok(())
}

#[test]
fn should_raw_unveil_the_first_frame() -> Result<()> {
    let out_dir = TempDir::new()?;
    let frames = prepare_frames(out_dir.path(), 2);
    let secret = out_dir.path().join("secret-frames");
    let raw = out_dir.path().join("secret.bin");
    let options = CodecOptions::default().with_channel(Channel::Green);

    hide(&frames, &secret, "green", options)?;
    unveil_raw(&secret, &raw, options)?;

    assert_eq!(fs::read(raw)?, b"green".to_vec());

    Ok(())
}

#[test]
fn should_stream_lazily_and_allow_to_stop_early() {
    let carrier = VideoCarrier::default();
    let source =
        (0..1_000u32).map(|_| -> Result<FramePlane> { Ok(FramePlane::from_fn(2, 2, |_, _| [1, 2, 3])) });

    let first_two: Vec<FramePlane> = carrier
        .encrypt_stream(source, b"ok")
        .take(2)
        .collect::<Result<_>>()
        .expect("Failed to hide in frames");

    assert_eq!(first_two.len(), 2);
    assert_eq!(ImageCarrier::default().extract(&first_two[1]).unwrap(), "ok");
}
