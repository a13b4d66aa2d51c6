mod common;

mod tests {
    use super::common::{MockSource, frame};
    use sextet_cabinet_lights::protocol::{
        FRAME_LEN, PAYLOAD_LEN, decode_sextet, encode_sextet, is_marker,
    };
    use sextet_cabinet_lights::{
        CabinetLights, CabinetZone, ControlFrame, DecodeOutcome, FrameDecoder,
    };

    #[test]
    fn test_marker_range() {
        assert!(!is_marker(0x2F));
        assert!(is_marker(0x30));
        assert!(is_marker(0x6F));
        assert!(!is_marker(0x70));
        assert_eq!((0..=255u8).filter(|b| is_marker(*b)).count(), 64);
    }

    #[test]
    fn test_sextet_encoding() {
        assert_eq!(decode_sextet(0x30), Some(0));
        assert_eq!(decode_sextet(0x6F), Some(0x3F));
        assert_eq!(decode_sextet(0x70), None);
        assert_eq!(encode_sextet(0x09), 0x39);
        assert_eq!(encode_sextet(0xFF), 0x6F);
    }

    #[test]
    fn test_idle_when_no_bytes() {
        let mut decoder = FrameDecoder::new();
        let mut source = MockSource::default();

        assert_eq!(decoder.poll(&mut source), DecodeOutcome::Idle);
        assert_eq!(decoder.lights(), CabinetLights::NONE);
    }

    #[test]
    fn test_non_marker_bytes_leave_state_unchanged() {
        let mut decoder = FrameDecoder::new();
        let mut source = MockSource::new(&frame(0x35));
        decoder.poll(&mut source);
        let before = decoder.lights();

        for byte in (0..=255u8).filter(|b| !is_marker(*b)) {
            let mut source = MockSource::new(&[byte, 0x31]);
            assert_eq!(decoder.poll(&mut source), DecodeOutcome::Discarded(byte));
            assert_eq!(decoder.lights(), before);
            assert_eq!(source.consumed, 1);
        }
    }

    #[test]
    fn test_upper_left_frame() {
        let mut decoder = FrameDecoder::new();
        let mut source = MockSource::new(&frame(0x31));

        let outcome = decoder.poll(&mut source);
        assert!(matches!(outcome, DecodeOutcome::Frame(f) if f.marker() == 0x31));
        assert_eq!(
            decoder.lights(),
            CabinetLights::single(CabinetZone::MarqueeUpperLeft)
        );
        assert_eq!(source.consumed, FRAME_LEN);
    }

    #[test]
    fn test_frame_0x39_lights_upper_left_and_lower_right() {
        let mut decoder = FrameDecoder::new();
        let mut source = MockSource::new(&frame(0x39));
        decoder.poll(&mut source);

        let lights = decoder.lights();
        assert_eq!(lights.bits(), 9);
        assert!(lights.contains(CabinetZone::MarqueeUpperLeft));
        assert!(lights.contains(CabinetZone::MarqueeLowerRight));
        assert_eq!(lights.iter().count(), 2);
    }

    #[test]
    fn test_frame_range_edges() {
        let mut decoder = FrameDecoder::new();

        decoder.poll(&mut MockSource::new(&frame(0x6F)));
        assert_eq!(decoder.lights(), CabinetLights::ALL);

        decoder.poll(&mut MockSource::new(&frame(0x30)));
        assert_eq!(decoder.lights(), CabinetLights::NONE);
    }

    #[test]
    fn test_state_is_replaced_not_merged() {
        let mut decoder = FrameDecoder::new();
        let mut source = MockSource::new(&frame(0x31));
        source.extend(&frame(0x32));

        decoder.poll(&mut source);
        decoder.poll(&mut source);
        assert_eq!(
            decoder.lights(),
            CabinetLights::single(CabinetZone::MarqueeUpperRight)
        );
    }

    #[test]
    fn test_resync_one_byte_per_poll() {
        let mut decoder = FrameDecoder::new();
        let mut source = MockSource::new(&[0x00, 0xFF]);
        source.extend(&frame(0x34));

        assert_eq!(decoder.poll(&mut source), DecodeOutcome::Discarded(0x00));
        assert_eq!(decoder.poll(&mut source), DecodeOutcome::Discarded(0xFF));
        assert!(matches!(decoder.poll(&mut source), DecodeOutcome::Frame(_)));
        assert_eq!(
            decoder.lights(),
            CabinetLights::single(CabinetZone::MarqueeLowerLeft)
        );
        assert_eq!(decoder.poll(&mut source), DecodeOutcome::Idle);
    }

    #[test]
    fn test_payload_is_consumed_but_not_interpreted() {
        let mut decoder = FrameDecoder::new();
        let mut bytes = [0x6F; FRAME_LEN];
        bytes[0] = 0x31;
        let mut source = MockSource::new(&bytes);

        let DecodeOutcome::Frame(frame) = decoder.poll(&mut source) else {
            panic!("expected a frame");
        };
        assert_eq!(frame.payload(), &[0x6F; PAYLOAD_LEN]);
        assert_eq!(frame.lights().bits(), 1);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_dropped_payload_byte_is_not_detected() {
        let mut decoder = FrameDecoder::new();
        // First frame lost one payload byte, so the second frame's marker
        // ends up inside the first frame's payload.
        let mut source = MockSource::new(&[0x31]);
        source.extend(&[0x30; PAYLOAD_LEN - 1]);
        source.extend(&frame(0x33)[..1]);
        source.extend(&[0x30; PAYLOAD_LEN + 1]);

        decoder.poll(&mut source);
        assert_eq!(decoder.lights().bits(), 0x01);

        decoder.poll(&mut source);
        assert_eq!(decoder.lights(), CabinetLights::NONE);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_control_frame_accessors() {
        let payload = [7u8; PAYLOAD_LEN];
        let frame = ControlFrame::new(0x3F, &payload).unwrap();

        assert_eq!(frame.marker(), 0x3F);
        assert_eq!(frame.lights().bits(), 0x0F);
        assert_eq!(frame.payload(), &payload);
        assert_eq!(frame.as_bytes()[0], 0x3F);
        assert_eq!(frame.as_bytes()[1..], payload);
    }

    #[test]
    fn test_control_frame_rejects_non_marker() {
        let payload = [0u8; PAYLOAD_LEN];
        assert_eq!(ControlFrame::new(0x00, &payload), None);
        assert_eq!(ControlFrame::new(0x2F, &payload), None);
        assert_eq!(ControlFrame::new(0x70, &payload), None);

        let frame = ControlFrame::new(encode_sextet(0x10), &payload).unwrap();
        assert_eq!(frame.lights(), CabinetLights::single(CabinetZone::BassLeft));
    }
}
