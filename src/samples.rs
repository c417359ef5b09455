//! Two canned bitmaps for demos and smoke tests.

use crate::bitmap::FixedBitmap;
use crate::error::Result;

const CUBE_HEX: &str = concat!(
    "1fffc03000c050014190064208082408102fffe0280820280820280820240810240810140410",
    "1404101404101407fff4081024100842600982800a03000c03fff80000000",
);

const MONA_LISA_HEX: &str = concat!(
    "1000000000000000000000000800000004001001000000000000000000000000100000000000",
    "0000000000001000000000000000000000000000000020000002000000000000000000000001",
    "12080000000000000001200000000000200008000000080001084e40100000010208c0250000",
    "44000000422e81008000081103182500200000000a18a300000000000010d29400020400154a",
    "a2d40000000204010752200000000000003da904000000000000af5400000800000005ad8200",
    "00040000002b6e021000004004005f0910200101000000500801000000000000081000000000",
    "0000022800420000000422000420000000200000000100002100000000400202000008200000",
    "0800040000000008000100000000001040810000008002000000800000000204800820488000",
    "00000080101000000000000000a8200008082400086540802200000002032002010000004000",
    "0912080290082200000000000000100004240040000024882009102002000002010289120008",
    "8215120808080a800005fe88002a080000017ff6001c4240000216eff800520680000af76ac0",
    "c01082004f17fff0028447420200dedb81040033882096ffc042a221440102f6fa0105100922",
    "001bfac00220444d8000edf8400881222c029775808204020a0801bbe00012208484000a6800",
    "4008809400025284208502449440152801250802241220110012000000000008480091240540",
    "1000000094400801484000040000900480400001602840080020a0006b002010020810001258",
    "00142212501020a64110000000088154380802109288000071501094004200001d6c00500252",
    "ae800066c0009204aa0a803f7654000aab60000aa9e00a2a055b5500376a13088854d0000526",
    "a2d4444af749000220151120536908048523eca842db46002ffe1b6ab3d5b71402bba5b6d186",
    "e99a402ddc2b6ed6d5f698006ea6db3bd756aee013fcb55d525d369400b74bb6d5bc6dad7001",
    "b9adaac93aab2c80462d3575ad555d2801015aa96d55544d4008d6aad2556ab66a800a9552b4",
    "695491540552a96aa55aa54ab5aad5695b44a59b254a8a5290476544895526528cb38891a6a1",
    "2a91571446554915488ac00a55249454926403325245242844a95288911255552aaa28d556ad",
    "5",
);

/// A 24x24 wireframe cube.
pub fn cube() -> Result<FixedBitmap> {
    FixedBitmap::from_hex(24, 24, CUBE_HEX)
}

/// A 68x100 dithered portrait.
pub fn mona_lisa() -> Result<FixedBitmap> {
    FixedBitmap::from_hex(68, 100, MONA_LISA_HEX)
}

// Tests
// -----------------------------------------------------------------------------
