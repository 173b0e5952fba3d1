//!
//! The Matroska/WebM schema.
//!
//! Covers the EBML header, the global elements and every Matroska element in common use, with the levels of the Matroska element table.  `SimpleTag` is listed at its usual depth only; nested `SimpleTag`s are reported with the same level.
//!

use crate::specs::ebml_schema;

ebml_schema! {
    ///
    /// Schema for Matroska and WebM documents.
    ///
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Matroska {
        EBML: Master = 0x1a45dfa3,
        EBML/EBMLVersion: UnsignedInt = 0x4286,
        EBML/EBMLReadVersion: UnsignedInt = 0x42f7,
        EBML/EBMLMaxIDLength: UnsignedInt = 0x42f2,
        EBML/EBMLMaxSizeLength: UnsignedInt = 0x42f3,
        EBML/DocType: String = 0x4282,
        EBML/DocTypeVersion: UnsignedInt = 0x4287,
        EBML/DocTypeReadVersion: UnsignedInt = 0x4285,

        #[global]
        Void: Binary = 0xec,

        #[global]
        #[name = "CRC-32"]
        Crc32: Binary = 0xbf,

        #[global]
        SignatureSlot: Master = 0x1b538667,
        SignatureSlot/SignatureAlgo: UnsignedInt = 0x7e8a,
        SignatureSlot/SignatureHash: UnsignedInt = 0x7e9a,
        SignatureSlot/SignaturePublicKey: Binary = 0x7ea5,
        SignatureSlot/Signature: Binary = 0x7eb5,
        SignatureSlot/SignatureElements: Master = 0x7e5b,
        SignatureSlot/SignatureElements/SignatureElementList: Master = 0x7e7b,
        SignatureSlot/SignatureElements/SignatureElementList/SignedElement: Binary = 0x6532,

        Segment: Master = 0x18538067,
        Segment/SeekHead: Master = 0x114d9b74,
        Segment/SeekHead/Seek: Master = 0x4dbb,
        Segment/SeekHead/Seek/SeekID: Binary = 0x53ab,
        Segment/SeekHead/Seek/SeekPosition: UnsignedInt = 0x53ac,
        Segment/Info: Master = 0x1549a966,
        Segment/Info/SegmentUID: Binary = 0x73a4,
        Segment/Info/SegmentFilename: Utf8 = 0x7384,
        Segment/Info/PrevUID: Binary = 0x3cb923,
        Segment/Info/PrevFilename: Utf8 = 0x3c83ab,
        Segment/Info/NextUID: Binary = 0x3eb923,
        Segment/Info/NextFilename: Utf8 = 0x3e83bb,
        Segment/Info/SegmentFamily: Binary = 0x4444,
        Segment/Info/ChapterTranslate: Master = 0x6924,
        Segment/Info/ChapterTranslate/ChapterTranslateEditionUID: UnsignedInt = 0x69fc,
        Segment/Info/ChapterTranslate/ChapterTranslateCodec: UnsignedInt = 0x69bf,
        Segment/Info/ChapterTranslate/ChapterTranslateID: Binary = 0x69a5,
        Segment/Info/TimecodeScale: UnsignedInt = 0x2ad7b1,
        Segment/Info/TimecodeScaleDenominator: UnsignedInt = 0x2ad7b2,
        Segment/Info/Duration: Float = 0x4489,
        Segment/Info/DateUTC: Date = 0x4461,
        Segment/Info/Title: Utf8 = 0x7ba9,
        Segment/Info/MuxingApp: Utf8 = 0x4d80,
        Segment/Info/WritingApp: Utf8 = 0x5741,
        Segment/Tracks: Master = 0x1654ae6b,
        Segment/Tracks/TrackEntry: Master = 0xae,
        Segment/Tracks/TrackEntry/TrackNumber: UnsignedInt = 0xd7,
        Segment/Tracks/TrackEntry/TrackUID: UnsignedInt = 0x73c5,
        Segment/Tracks/TrackEntry/TrackType: UnsignedInt = 0x83,
        Segment/Tracks/TrackEntry/FlagEnabled: UnsignedInt = 0xb9,
        Segment/Tracks/TrackEntry/FlagDefault: UnsignedInt = 0x88,
        Segment/Tracks/TrackEntry/FlagForced: UnsignedInt = 0x55aa,
        Segment/Tracks/TrackEntry/FlagLacing: UnsignedInt = 0x9c,
        Segment/Tracks/TrackEntry/MinCache: UnsignedInt = 0x6de7,
        Segment/Tracks/TrackEntry/MaxCache: UnsignedInt = 0x6df8,
        Segment/Tracks/TrackEntry/DefaultDuration: UnsignedInt = 0x23e383,
        Segment/Tracks/TrackEntry/DefaultDecodedFieldDuration: UnsignedInt = 0x234e7a,
        Segment/Tracks/TrackEntry/TrackTimecodeScale: Float = 0x23314f,
        Segment/Tracks/TrackEntry/TrackOffset: Integer = 0x537f,
        Segment/Tracks/TrackEntry/MaxBlockAdditionID: UnsignedInt = 0x55ee,
        Segment/Tracks/TrackEntry/Name: Utf8 = 0x536e,
        Segment/Tracks/TrackEntry/Language: String = 0x22b59c,
        Segment/Tracks/TrackEntry/CodecID: String = 0x86,
        Segment/Tracks/TrackEntry/CodecPrivate: Binary = 0x63a2,
        Segment/Tracks/TrackEntry/CodecName: Utf8 = 0x258688,
        Segment/Tracks/TrackEntry/AttachmentLink: UnsignedInt = 0x7446,
        Segment/Tracks/TrackEntry/CodecSettings: Utf8 = 0x3a9697,
        Segment/Tracks/TrackEntry/CodecInfoURL: String = 0x3b4040,
        Segment/Tracks/TrackEntry/CodecDownloadURL: String = 0x26b240,
        Segment/Tracks/TrackEntry/CodecDecodeAll: UnsignedInt = 0xaa,
        Segment/Tracks/TrackEntry/TrackOverlay: UnsignedInt = 0x6fab,
        Segment/Tracks/TrackEntry/CodecDelay: UnsignedInt = 0x56aa,
        Segment/Tracks/TrackEntry/SeekPreRoll: UnsignedInt = 0x56bb,
        Segment/Tracks/TrackEntry/TrackTranslate: Master = 0x6624,
        Segment/Tracks/TrackEntry/TrackTranslate/TrackTranslateEditionUID: UnsignedInt = 0x66fc,
        Segment/Tracks/TrackEntry/TrackTranslate/TrackTranslateCodec: UnsignedInt = 0x66bf,
        Segment/Tracks/TrackEntry/TrackTranslate/TrackTranslateTrackID: Binary = 0x66a5,
        Segment/Tracks/TrackEntry/Video: Master = 0xe0,
        Segment/Tracks/TrackEntry/Video/FlagInterlaced: UnsignedInt = 0x9a,
        Segment/Tracks/TrackEntry/Video/StereoMode: UnsignedInt = 0x53b8,
        Segment/Tracks/TrackEntry/Video/AlphaMode: UnsignedInt = 0x53c0,
        Segment/Tracks/TrackEntry/Video/OldStereoMode: UnsignedInt = 0x53b9,
        Segment/Tracks/TrackEntry/Video/PixelWidth: UnsignedInt = 0xb0,
        Segment/Tracks/TrackEntry/Video/PixelHeight: UnsignedInt = 0xba,
        Segment/Tracks/TrackEntry/Video/PixelCropBottom: UnsignedInt = 0x54aa,
        Segment/Tracks/TrackEntry/Video/PixelCropTop: UnsignedInt = 0x54bb,
        Segment/Tracks/TrackEntry/Video/PixelCropLeft: UnsignedInt = 0x54cc,
        Segment/Tracks/TrackEntry/Video/PixelCropRight: UnsignedInt = 0x54dd,
        Segment/Tracks/TrackEntry/Video/DisplayWidth: UnsignedInt = 0x54b0,
        Segment/Tracks/TrackEntry/Video/DisplayHeight: UnsignedInt = 0x54ba,
        Segment/Tracks/TrackEntry/Video/DisplayUnit: UnsignedInt = 0x54b2,
        Segment/Tracks/TrackEntry/Video/AspectRatioType: UnsignedInt = 0x54b3,
        Segment/Tracks/TrackEntry/Video/ColourSpace: Binary = 0x2eb524,
        Segment/Tracks/TrackEntry/Video/GammaValue: Float = 0x2fb523,
        Segment/Tracks/TrackEntry/Video/FrameRate: Float = 0x2383e3,
        Segment/Tracks/TrackEntry/Audio: Master = 0xe1,
        Segment/Tracks/TrackEntry/Audio/SamplingFrequency: Float = 0xb5,
        Segment/Tracks/TrackEntry/Audio/OutputSamplingFrequency: Float = 0x78b5,
        Segment/Tracks/TrackEntry/Audio/Channels: UnsignedInt = 0x9f,
        Segment/Tracks/TrackEntry/Audio/ChannelPositions: Binary = 0x7d7b,
        Segment/Tracks/TrackEntry/Audio/BitDepth: UnsignedInt = 0x6264,
        Segment/Tracks/TrackEntry/TrackOperation: Master = 0xe2,
        Segment/Tracks/TrackEntry/TrackOperation/TrackCombinePlanes: Master = 0xe3,
        Segment/Tracks/TrackEntry/TrackOperation/TrackCombinePlanes/TrackPlane: Master = 0xe4,
        Segment/Tracks/TrackEntry/TrackOperation/TrackCombinePlanes/TrackPlane/TrackPlaneUID: UnsignedInt = 0xe5,
        Segment/Tracks/TrackEntry/TrackOperation/TrackCombinePlanes/TrackPlane/TrackPlaneType: UnsignedInt = 0xe6,
        Segment/Tracks/TrackEntry/TrackOperation/TrackJoinBlocks: Master = 0xe9,
        Segment/Tracks/TrackEntry/TrackOperation/TrackJoinBlocks/TrackJoinUID: UnsignedInt = 0xed,
        Segment/Tracks/TrackEntry/TrickTrackUID: UnsignedInt = 0xc0,
        Segment/Tracks/TrackEntry/TrickTrackSegmentUID: Binary = 0xc1,
        Segment/Tracks/TrackEntry/TrickTrackFlag: UnsignedInt = 0xc6,
        Segment/Tracks/TrackEntry/TrickMasterTrackUID: UnsignedInt = 0xc7,
        Segment/Tracks/TrackEntry/TrickMasterTrackSegmentUID: Binary = 0xc4,
        Segment/Tracks/TrackEntry/ContentEncodings: Master = 0x6d80,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding: Master = 0x6240,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncodingOrder: UnsignedInt = 0x5031,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncodingScope: UnsignedInt = 0x5032,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncodingType: UnsignedInt = 0x5033,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentCompression: Master = 0x5034,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentCompression/ContentCompAlgo: UnsignedInt = 0x4254,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentCompression/ContentCompSettings: Binary = 0x4255,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption: Master = 0x5035,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentEncAlgo: UnsignedInt = 0x47e1,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentEncKeyID: Binary = 0x47e2,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentSignature: Binary = 0x47e3,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentSigKeyID: Binary = 0x47e4,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentSigAlgo: UnsignedInt = 0x47e5,
        Segment/Tracks/TrackEntry/ContentEncodings/ContentEncoding/ContentEncryption/ContentSigHashAlgo: UnsignedInt = 0x47e6,
        Segment/Cluster: Master = 0x1f43b675,
        Segment/Cluster/Timecode: UnsignedInt = 0xe7,
        Segment/Cluster/SilentTracks: Master = 0x5854,
        Segment/Cluster/SilentTracks/SilentTrackNumber: UnsignedInt = 0x58d7,
        Segment/Cluster/Position: UnsignedInt = 0xa7,
        Segment/Cluster/PrevSize: UnsignedInt = 0xab,
        Segment/Cluster/SimpleBlock: Binary = 0xa3,
        Segment/Cluster/BlockGroup: Master = 0xa0,
        Segment/Cluster/BlockGroup/Block: Binary = 0xa1,
        Segment/Cluster/BlockGroup/BlockVirtual: Binary = 0xa2,
        Segment/Cluster/BlockGroup/BlockAdditions: Master = 0x75a1,
        Segment/Cluster/BlockGroup/BlockAdditions/BlockMore: Master = 0xa6,
        Segment/Cluster/BlockGroup/BlockAdditions/BlockMore/BlockAddID: UnsignedInt = 0xee,
        Segment/Cluster/BlockGroup/BlockAdditions/BlockMore/BlockAdditional: Binary = 0xa5,
        Segment/Cluster/BlockGroup/BlockDuration: UnsignedInt = 0x9b,
        Segment/Cluster/BlockGroup/ReferencePriority: UnsignedInt = 0xfa,
        Segment/Cluster/BlockGroup/ReferenceBlock: Integer = 0xfb,
        Segment/Cluster/BlockGroup/ReferenceVirtual: Integer = 0xfd,
        Segment/Cluster/BlockGroup/CodecState: Binary = 0xa4,
        Segment/Cluster/BlockGroup/DiscardPadding: Integer = 0x75a2,
        Segment/Cluster/BlockGroup/Slices: Master = 0x8e,
        Segment/Cluster/BlockGroup/Slices/TimeSlice: Master = 0xe8,
        Segment/Cluster/BlockGroup/Slices/TimeSlice/LaceNumber: UnsignedInt = 0xcc,
        Segment/Cluster/BlockGroup/Slices/TimeSlice/FrameNumber: UnsignedInt = 0xcd,
        Segment/Cluster/BlockGroup/Slices/TimeSlice/BlockAdditionID: UnsignedInt = 0xcb,
        Segment/Cluster/BlockGroup/Slices/TimeSlice/Delay: UnsignedInt = 0xce,
        Segment/Cluster/BlockGroup/Slices/TimeSlice/SliceDuration: UnsignedInt = 0xcf,
        Segment/Cluster/BlockGroup/ReferenceFrame: Master = 0xc8,
        Segment/Cluster/BlockGroup/ReferenceFrame/ReferenceOffset: UnsignedInt = 0xc9,
        Segment/Cluster/BlockGroup/ReferenceFrame/ReferenceTimeCode: UnsignedInt = 0xca,
        Segment/Cluster/EncryptedBlock: Binary = 0xaf,
        Segment/Cues: Master = 0x1c53bb6b,
        Segment/Cues/CuePoint: Master = 0xbb,
        Segment/Cues/CuePoint/CueTime: UnsignedInt = 0xb3,
        Segment/Cues/CuePoint/CueTrackPositions: Master = 0xb7,
        Segment/Cues/CuePoint/CueTrackPositions/CueTrack: UnsignedInt = 0xf7,
        Segment/Cues/CuePoint/CueTrackPositions/CueClusterPosition: UnsignedInt = 0xf1,
        Segment/Cues/CuePoint/CueTrackPositions/CueRelativePosition: UnsignedInt = 0xf0,
        Segment/Cues/CuePoint/CueTrackPositions/CueDuration: UnsignedInt = 0xb2,
        Segment/Cues/CuePoint/CueTrackPositions/CueBlockNumber: UnsignedInt = 0x5378,
        Segment/Cues/CuePoint/CueTrackPositions/CueCodecState: UnsignedInt = 0xea,
        Segment/Cues/CuePoint/CueTrackPositions/CueReference: Master = 0xdb,
        Segment/Cues/CuePoint/CueTrackPositions/CueReference/CueRefTime: UnsignedInt = 0x96,
        Segment/Cues/CuePoint/CueTrackPositions/CueReference/CueRefCluster: UnsignedInt = 0x97,
        Segment/Cues/CuePoint/CueTrackPositions/CueReference/CueRefNumber: UnsignedInt = 0x535f,
        Segment/Cues/CuePoint/CueTrackPositions/CueReference/CueRefCodecState: UnsignedInt = 0xeb,
        Segment/Attachments: Master = 0x1941a469,
        Segment/Attachments/AttachedFile: Master = 0x61a7,
        Segment/Attachments/AttachedFile/FileDescription: Utf8 = 0x467e,
        Segment/Attachments/AttachedFile/FileName: Utf8 = 0x466e,
        Segment/Attachments/AttachedFile/FileMimeType: String = 0x4660,
        Segment/Attachments/AttachedFile/FileData: Binary = 0x465c,
        Segment/Attachments/AttachedFile/FileUID: UnsignedInt = 0x46ae,
        Segment/Attachments/AttachedFile/FileReferral: Binary = 0x4675,
        Segment/Attachments/AttachedFile/FileUsedStartTime: UnsignedInt = 0x4661,
        Segment/Attachments/AttachedFile/FileUsedEndTime: UnsignedInt = 0x4662,
        Segment/Chapters: Master = 0x1043a770,
        Segment/Chapters/EditionEntry: Master = 0x45b9,
        Segment/Chapters/EditionEntry/EditionUID: UnsignedInt = 0x45bc,
        Segment/Chapters/EditionEntry/EditionFlagHidden: UnsignedInt = 0x45bd,
        Segment/Chapters/EditionEntry/EditionFlagDefault: UnsignedInt = 0x45db,
        Segment/Chapters/EditionEntry/EditionFlagOrdered: UnsignedInt = 0x45dd,
        Segment/Chapters/EditionEntry/ChapterAtom: Master = 0xb6,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterUID: UnsignedInt = 0x73c4,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterStringUID: Utf8 = 0x5654,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterTimeStart: UnsignedInt = 0x91,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterTimeEnd: UnsignedInt = 0x92,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterFlagHidden: UnsignedInt = 0x98,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterFlagEnabled: UnsignedInt = 0x4598,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterSegmentUID: Binary = 0x6e67,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterSegmentEditionUID: UnsignedInt = 0x6ebc,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterPhysicalEquiv: UnsignedInt = 0x63c3,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterTrack: Master = 0x8f,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterTrack/ChapterTrackNumber: UnsignedInt = 0x89,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterDisplay: Master = 0x80,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterDisplay/ChapString: Utf8 = 0x85,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterDisplay/ChapLanguage: String = 0x437c,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapterDisplay/ChapCountry: String = 0x437e,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess: Master = 0x6944,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessCodecID: UnsignedInt = 0x6955,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessPrivate: Binary = 0x450d,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessCommand: Master = 0x6911,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessCommand/ChapProcessTime: UnsignedInt = 0x6922,
        Segment/Chapters/EditionEntry/ChapterAtom/ChapProcess/ChapProcessCommand/ChapProcessData: Binary = 0x6933,
        Segment/Tags: Master = 0x1254c367,
        Segment/Tags/Tag: Master = 0x7373,
        Segment/Tags/Tag/Targets: Master = 0x63c0,
        Segment/Tags/Tag/Targets/TargetTypeValue: UnsignedInt = 0x68ca,
        Segment/Tags/Tag/Targets/TargetType: String = 0x63ca,
        Segment/Tags/Tag/Targets/TagTrackUID: UnsignedInt = 0x63c5,
        Segment/Tags/Tag/Targets/TagEditionUID: UnsignedInt = 0x63c9,
        Segment/Tags/Tag/Targets/TagChapterUID: UnsignedInt = 0x63c4,
        Segment/Tags/Tag/Targets/TagAttachmentUID: UnsignedInt = 0x63c6,
        Segment/Tags/Tag/SimpleTag: Master = 0x67c8,
        Segment/Tags/Tag/SimpleTag/TagName: Utf8 = 0x45a3,
        Segment/Tags/Tag/SimpleTag/TagLanguage: String = 0x447a,
        Segment/Tags/Tag/SimpleTag/TagDefault: UnsignedInt = 0x4484,
        Segment/Tags/Tag/SimpleTag/TagString: Utf8 = 0x4487,
        Segment/Tags/Tag/SimpleTag/TagBinary: Binary = 0x4485,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{ElementType, Schema};

    #[test]
    fn levels_follow_paths() {
        assert_eq!(Some(0), Matroska.id_to_info(0x18538067).level);
        assert_eq!(Some(1), Matroska.id_to_info(0x1f43b675).level);
        assert_eq!(Some(2), Matroska.id_to_info(0xa3).level);
        assert_eq!(Some(3), Matroska.id_to_info(0xa1).level);
        assert_eq!(Some(4), Matroska.id_to_info(0xb0).level);
        assert_eq!(Some(6), Matroska.id_to_info(0x4254).level);
    }

    #[test]
    fn globals_have_no_level() {
        for name in ["Void", "CRC-32", "SignatureSlot"] {
            let id = Matroska.name_to_id(name).expect("global should be declared");
            assert_eq!(None, Matroska.id_to_info(id).level, "{}", name);
        }
        assert_eq!(Some(1), Matroska.id_to_info(0x7e8a).level);
    }

    #[test]
    fn names_and_ids_agree() {
        for element in Matroska::ELEMENTS {
            assert_eq!(Some(element.id), Matroska.name_to_id(element.name));
            assert_eq!(*element, Matroska.id_to_info(element.id));
        }
        assert_eq!(225, Matroska::ELEMENTS.len());
    }

    #[test]
    fn types() {
        assert_eq!(Some(ElementType::Master), Matroska.id_to_info(0x1a45dfa3).element_type);
        assert_eq!(Some(ElementType::Utf8), Matroska.id_to_info(0x7ba9).element_type);
        assert_eq!(Some(ElementType::Date), Matroska.id_to_info(0x4461).element_type);
        assert_eq!(Some(ElementType::Float), Matroska.id_to_info(0x4489).element_type);
        assert_eq!(Some(ElementType::Integer), Matroska.id_to_info(0xfb).element_type);
    }

    #[test]
    fn unknown_ids_get_the_sentinel() {
        let info = Matroska.id_to_info(0x1234);
        assert_eq!("unknown", info.name);
        assert_eq!(0x1234, info.id);
        assert_eq!(None, info.element_type);
        assert_eq!(None, Matroska.name_to_id("unknown"));
    }
}
