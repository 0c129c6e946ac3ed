// Code page tables for the EBCDIC charsets. `decode` maps a byte to its
// Unicode scalar; `encode` is the inverse, sorted by char so it can be
// binary searched.

pub(crate) struct SingleByteTable {
    pub(crate) decode: [char; 256],
    pub(crate) encode: [(char, u8); 256],
}

impl SingleByteTable {
    pub(crate) fn encode(&self, c: char) -> Option<u8> {
        self.encode
            .binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|i| self.encode[i].1)
    }

    #[inline]
    pub(crate) fn decode(&self, b: u8) -> char {
        self.decode[b as usize]
    }
}

pub(crate) static IBM037: SingleByteTable = SingleByteTable {
    decode: [
        '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}',
        '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
        '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
        '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
        '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}',
        '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
        '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
        '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
        '\u{0020}', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}',
        '\u{00e7}', '\u{00f1}', '\u{00a2}', '\u{002e}', '\u{003c}', '\u{0028}', '\u{002b}', '\u{007c}',
        '\u{0026}', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
        '\u{00ec}', '\u{00df}', '\u{0021}', '\u{0024}', '\u{002a}', '\u{0029}', '\u{003b}', '\u{00ac}',
        '\u{002d}', '\u{002f}', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}',
        '\u{00c7}', '\u{00d1}', '\u{00a6}', '\u{002c}', '\u{0025}', '\u{005f}', '\u{003e}', '\u{003f}',
        '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
        '\u{00cc}', '\u{0060}', '\u{003a}', '\u{0023}', '\u{0040}', '\u{0027}', '\u{003d}', '\u{0022}',
        '\u{00d8}', '\u{0061}', '\u{0062}', '\u{0063}', '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}',
        '\u{0068}', '\u{0069}', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
        '\u{00b0}', '\u{006a}', '\u{006b}', '\u{006c}', '\u{006d}', '\u{006e}', '\u{006f}', '\u{0070}',
        '\u{0071}', '\u{0072}', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
        '\u{00b5}', '\u{007e}', '\u{0073}', '\u{0074}', '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}',
        '\u{0079}', '\u{007a}', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
        '\u{005e}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
        '\u{00bd}', '\u{00be}', '\u{005b}', '\u{005d}', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
        '\u{007b}', '\u{0041}', '\u{0042}', '\u{0043}', '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}',
        '\u{0048}', '\u{0049}', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
        '\u{007d}', '\u{004a}', '\u{004b}', '\u{004c}', '\u{004d}', '\u{004e}', '\u{004f}', '\u{0050}',
        '\u{0051}', '\u{0052}', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
        '\u{005c}', '\u{00f7}', '\u{0053}', '\u{0054}', '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}',
        '\u{0059}', '\u{005a}', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
        '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}',
        '\u{0038}', '\u{0039}', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
    ],
    encode: [
        ('\u{0000}', 0x00), ('\u{0001}', 0x01), ('\u{0002}', 0x02), ('\u{0003}', 0x03),
        ('\u{0004}', 0x37), ('\u{0005}', 0x2d), ('\u{0006}', 0x2e), ('\u{0007}', 0x2f),
        ('\u{0008}', 0x16), ('\u{0009}', 0x05), ('\u{000a}', 0x25), ('\u{000b}', 0x0b),
        ('\u{000c}', 0x0c), ('\u{000d}', 0x0d), ('\u{000e}', 0x0e), ('\u{000f}', 0x0f),
        ('\u{0010}', 0x10), ('\u{0011}', 0x11), ('\u{0012}', 0x12), ('\u{0013}', 0x13),
        ('\u{0014}', 0x3c), ('\u{0015}', 0x3d), ('\u{0016}', 0x32), ('\u{0017}', 0x26),
        ('\u{0018}', 0x18), ('\u{0019}', 0x19), ('\u{001a}', 0x3f), ('\u{001b}', 0x27),
        ('\u{001c}', 0x1c), ('\u{001d}', 0x1d), ('\u{001e}', 0x1e), ('\u{001f}', 0x1f),
        ('\u{0020}', 0x40), ('\u{0021}', 0x5a), ('\u{0022}', 0x7f), ('\u{0023}', 0x7b),
        ('\u{0024}', 0x5b), ('\u{0025}', 0x6c), ('\u{0026}', 0x50), ('\u{0027}', 0x7d),
        ('\u{0028}', 0x4d), ('\u{0029}', 0x5d), ('\u{002a}', 0x5c), ('\u{002b}', 0x4e),
        ('\u{002c}', 0x6b), ('\u{002d}', 0x60), ('\u{002e}', 0x4b), ('\u{002f}', 0x61),
        ('\u{0030}', 0xf0), ('\u{0031}', 0xf1), ('\u{0032}', 0xf2), ('\u{0033}', 0xf3),
        ('\u{0034}', 0xf4), ('\u{0035}', 0xf5), ('\u{0036}', 0xf6), ('\u{0037}', 0xf7),
        ('\u{0038}', 0xf8), ('\u{0039}', 0xf9), ('\u{003a}', 0x7a), ('\u{003b}', 0x5e),
        ('\u{003c}', 0x4c), ('\u{003d}', 0x7e), ('\u{003e}', 0x6e), ('\u{003f}', 0x6f),
        ('\u{0040}', 0x7c), ('\u{0041}', 0xc1), ('\u{0042}', 0xc2), ('\u{0043}', 0xc3),
        ('\u{0044}', 0xc4), ('\u{0045}', 0xc5), ('\u{0046}', 0xc6), ('\u{0047}', 0xc7),
        ('\u{0048}', 0xc8), ('\u{0049}', 0xc9), ('\u{004a}', 0xd1), ('\u{004b}', 0xd2),
        ('\u{004c}', 0xd3), ('\u{004d}', 0xd4), ('\u{004e}', 0xd5), ('\u{004f}', 0xd6),
        ('\u{0050}', 0xd7), ('\u{0051}', 0xd8), ('\u{0052}', 0xd9), ('\u{0053}', 0xe2),
        ('\u{0054}', 0xe3), ('\u{0055}', 0xe4), ('\u{0056}', 0xe5), ('\u{0057}', 0xe6),
        ('\u{0058}', 0xe7), ('\u{0059}', 0xe8), ('\u{005a}', 0xe9), ('\u{005b}', 0xba),
        ('\u{005c}', 0xe0), ('\u{005d}', 0xbb), ('\u{005e}', 0xb0), ('\u{005f}', 0x6d),
        ('\u{0060}', 0x79), ('\u{0061}', 0x81), ('\u{0062}', 0x82), ('\u{0063}', 0x83),
        ('\u{0064}', 0x84), ('\u{0065}', 0x85), ('\u{0066}', 0x86), ('\u{0067}', 0x87),
        ('\u{0068}', 0x88), ('\u{0069}', 0x89), ('\u{006a}', 0x91), ('\u{006b}', 0x92),
        ('\u{006c}', 0x93), ('\u{006d}', 0x94), ('\u{006e}', 0x95), ('\u{006f}', 0x96),
        ('\u{0070}', 0x97), ('\u{0071}', 0x98), ('\u{0072}', 0x99), ('\u{0073}', 0xa2),
        ('\u{0074}', 0xa3), ('\u{0075}', 0xa4), ('\u{0076}', 0xa5), ('\u{0077}', 0xa6),
        ('\u{0078}', 0xa7), ('\u{0079}', 0xa8), ('\u{007a}', 0xa9), ('\u{007b}', 0xc0),
        ('\u{007c}', 0x4f), ('\u{007d}', 0xd0), ('\u{007e}', 0xa1), ('\u{007f}', 0x07),
        ('\u{0080}', 0x20), ('\u{0081}', 0x21), ('\u{0082}', 0x22), ('\u{0083}', 0x23),
        ('\u{0084}', 0x24), ('\u{0085}', 0x15), ('\u{0086}', 0x06), ('\u{0087}', 0x17),
        ('\u{0088}', 0x28), ('\u{0089}', 0x29), ('\u{008a}', 0x2a), ('\u{008b}', 0x2b),
        ('\u{008c}', 0x2c), ('\u{008d}', 0x09), ('\u{008e}', 0x0a), ('\u{008f}', 0x1b),
        ('\u{0090}', 0x30), ('\u{0091}', 0x31), ('\u{0092}', 0x1a), ('\u{0093}', 0x33),
        ('\u{0094}', 0x34), ('\u{0095}', 0x35), ('\u{0096}', 0x36), ('\u{0097}', 0x08),
        ('\u{0098}', 0x38), ('\u{0099}', 0x39), ('\u{009a}', 0x3a), ('\u{009b}', 0x3b),
        ('\u{009c}', 0x04), ('\u{009d}', 0x14), ('\u{009e}', 0x3e), ('\u{009f}', 0xff),
        ('\u{00a0}', 0x41), ('\u{00a1}', 0xaa), ('\u{00a2}', 0x4a), ('\u{00a3}', 0xb1),
        ('\u{00a4}', 0x9f), ('\u{00a5}', 0xb2), ('\u{00a6}', 0x6a), ('\u{00a7}', 0xb5),
        ('\u{00a8}', 0xbd), ('\u{00a9}', 0xb4), ('\u{00aa}', 0x9a), ('\u{00ab}', 0x8a),
        ('\u{00ac}', 0x5f), ('\u{00ad}', 0xca), ('\u{00ae}', 0xaf), ('\u{00af}', 0xbc),
        ('\u{00b0}', 0x90), ('\u{00b1}', 0x8f), ('\u{00b2}', 0xea), ('\u{00b3}', 0xfa),
        ('\u{00b4}', 0xbe), ('\u{00b5}', 0xa0), ('\u{00b6}', 0xb6), ('\u{00b7}', 0xb3),
        ('\u{00b8}', 0x9d), ('\u{00b9}', 0xda), ('\u{00ba}', 0x9b), ('\u{00bb}', 0x8b),
        ('\u{00bc}', 0xb7), ('\u{00bd}', 0xb8), ('\u{00be}', 0xb9), ('\u{00bf}', 0xab),
        ('\u{00c0}', 0x64), ('\u{00c1}', 0x65), ('\u{00c2}', 0x62), ('\u{00c3}', 0x66),
        ('\u{00c4}', 0x63), ('\u{00c5}', 0x67), ('\u{00c6}', 0x9e), ('\u{00c7}', 0x68),
        ('\u{00c8}', 0x74), ('\u{00c9}', 0x71), ('\u{00ca}', 0x72), ('\u{00cb}', 0x73),
        ('\u{00cc}', 0x78), ('\u{00cd}', 0x75), ('\u{00ce}', 0x76), ('\u{00cf}', 0x77),
        ('\u{00d0}', 0xac), ('\u{00d1}', 0x69), ('\u{00d2}', 0xed), ('\u{00d3}', 0xee),
        ('\u{00d4}', 0xeb), ('\u{00d5}', 0xef), ('\u{00d6}', 0xec), ('\u{00d7}', 0xbf),
        ('\u{00d8}', 0x80), ('\u{00d9}', 0xfd), ('\u{00da}', 0xfe), ('\u{00db}', 0xfb),
        ('\u{00dc}', 0xfc), ('\u{00dd}', 0xad), ('\u{00de}', 0xae), ('\u{00df}', 0x59),
        ('\u{00e0}', 0x44), ('\u{00e1}', 0x45), ('\u{00e2}', 0x42), ('\u{00e3}', 0x46),
        ('\u{00e4}', 0x43), ('\u{00e5}', 0x47), ('\u{00e6}', 0x9c), ('\u{00e7}', 0x48),
        ('\u{00e8}', 0x54), ('\u{00e9}', 0x51), ('\u{00ea}', 0x52), ('\u{00eb}', 0x53),
        ('\u{00ec}', 0x58), ('\u{00ed}', 0x55), ('\u{00ee}', 0x56), ('\u{00ef}', 0x57),
        ('\u{00f0}', 0x8c), ('\u{00f1}', 0x49), ('\u{00f2}', 0xcd), ('\u{00f3}', 0xce),
        ('\u{00f4}', 0xcb), ('\u{00f5}', 0xcf), ('\u{00f6}', 0xcc), ('\u{00f7}', 0xe1),
        ('\u{00f8}', 0x70), ('\u{00f9}', 0xdd), ('\u{00fa}', 0xde), ('\u{00fb}', 0xdb),
        ('\u{00fc}', 0xdc), ('\u{00fd}', 0x8d), ('\u{00fe}', 0x8e), ('\u{00ff}', 0xdf),
    ],
};

pub(crate) static IBM500: SingleByteTable = SingleByteTable {
    decode: [
        '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}',
        '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
        '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
        '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
        '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}',
        '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
        '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
        '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
        '\u{0020}', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}',
        '\u{00e7}', '\u{00f1}', '\u{005b}', '\u{002e}', '\u{003c}', '\u{0028}', '\u{002b}', '\u{0021}',
        '\u{0026}', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
        '\u{00ec}', '\u{00df}', '\u{005d}', '\u{0024}', '\u{002a}', '\u{0029}', '\u{003b}', '\u{005e}',
        '\u{002d}', '\u{002f}', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}',
        '\u{00c7}', '\u{00d1}', '\u{00a6}', '\u{002c}', '\u{0025}', '\u{005f}', '\u{003e}', '\u{003f}',
        '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
        '\u{00cc}', '\u{0060}', '\u{003a}', '\u{0023}', '\u{0040}', '\u{0027}', '\u{003d}', '\u{0022}',
        '\u{00d8}', '\u{0061}', '\u{0062}', '\u{0063}', '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}',
        '\u{0068}', '\u{0069}', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
        '\u{00b0}', '\u{006a}', '\u{006b}', '\u{006c}', '\u{006d}', '\u{006e}', '\u{006f}', '\u{0070}',
        '\u{0071}', '\u{0072}', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
        '\u{00b5}', '\u{007e}', '\u{0073}', '\u{0074}', '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}',
        '\u{0079}', '\u{007a}', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
        '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
        '\u{00bd}', '\u{00be}', '\u{00ac}', '\u{007c}', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
        '\u{007b}', '\u{0041}', '\u{0042}', '\u{0043}', '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}',
        '\u{0048}', '\u{0049}', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
        '\u{007d}', '\u{004a}', '\u{004b}', '\u{004c}', '\u{004d}', '\u{004e}', '\u{004f}', '\u{0050}',
        '\u{0051}', '\u{0052}', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
        '\u{005c}', '\u{00f7}', '\u{0053}', '\u{0054}', '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}',
        '\u{0059}', '\u{005a}', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
        '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}',
        '\u{0038}', '\u{0039}', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
    ],
    encode: [
        ('\u{0000}', 0x00), ('\u{0001}', 0x01), ('\u{0002}', 0x02), ('\u{0003}', 0x03),
        ('\u{0004}', 0x37), ('\u{0005}', 0x2d), ('\u{0006}', 0x2e), ('\u{0007}', 0x2f),
        ('\u{0008}', 0x16), ('\u{0009}', 0x05), ('\u{000a}', 0x25), ('\u{000b}', 0x0b),
        ('\u{000c}', 0x0c), ('\u{000d}', 0x0d), ('\u{000e}', 0x0e), ('\u{000f}', 0x0f),
        ('\u{0010}', 0x10), ('\u{0011}', 0x11), ('\u{0012}', 0x12), ('\u{0013}', 0x13),
        ('\u{0014}', 0x3c), ('\u{0015}', 0x3d), ('\u{0016}', 0x32), ('\u{0017}', 0x26),
        ('\u{0018}', 0x18), ('\u{0019}', 0x19), ('\u{001a}', 0x3f), ('\u{001b}', 0x27),
        ('\u{001c}', 0x1c), ('\u{001d}', 0x1d), ('\u{001e}', 0x1e), ('\u{001f}', 0x1f),
        ('\u{0020}', 0x40), ('\u{0021}', 0x4f), ('\u{0022}', 0x7f), ('\u{0023}', 0x7b),
        ('\u{0024}', 0x5b), ('\u{0025}', 0x6c), ('\u{0026}', 0x50), ('\u{0027}', 0x7d),
        ('\u{0028}', 0x4d), ('\u{0029}', 0x5d), ('\u{002a}', 0x5c), ('\u{002b}', 0x4e),
        ('\u{002c}', 0x6b), ('\u{002d}', 0x60), ('\u{002e}', 0x4b), ('\u{002f}', 0x61),
        ('\u{0030}', 0xf0), ('\u{0031}', 0xf1), ('\u{0032}', 0xf2), ('\u{0033}', 0xf3),
        ('\u{0034}', 0xf4), ('\u{0035}', 0xf5), ('\u{0036}', 0xf6), ('\u{0037}', 0xf7),
        ('\u{0038}', 0xf8), ('\u{0039}', 0xf9), ('\u{003a}', 0x7a), ('\u{003b}', 0x5e),
        ('\u{003c}', 0x4c), ('\u{003d}', 0x7e), ('\u{003e}', 0x6e), ('\u{003f}', 0x6f),
        ('\u{0040}', 0x7c), ('\u{0041}', 0xc1), ('\u{0042}', 0xc2), ('\u{0043}', 0xc3),
        ('\u{0044}', 0xc4), ('\u{0045}', 0xc5), ('\u{0046}', 0xc6), ('\u{0047}', 0xc7),
        ('\u{0048}', 0xc8), ('\u{0049}', 0xc9), ('\u{004a}', 0xd1), ('\u{004b}', 0xd2),
        ('\u{004c}', 0xd3), ('\u{004d}', 0xd4), ('\u{004e}', 0xd5), ('\u{004f}', 0xd6),
        ('\u{0050}', 0xd7), ('\u{0051}', 0xd8), ('\u{0052}', 0xd9), ('\u{0053}', 0xe2),
        ('\u{0054}', 0xe3), ('\u{0055}', 0xe4), ('\u{0056}', 0xe5), ('\u{0057}', 0xe6),
        ('\u{0058}', 0xe7), ('\u{0059}', 0xe8), ('\u{005a}', 0xe9), ('\u{005b}', 0x4a),
        ('\u{005c}', 0xe0), ('\u{005d}', 0x5a), ('\u{005e}', 0x5f), ('\u{005f}', 0x6d),
        ('\u{0060}', 0x79), ('\u{0061}', 0x81), ('\u{0062}', 0x82), ('\u{0063}', 0x83),
        ('\u{0064}', 0x84), ('\u{0065}', 0x85), ('\u{0066}', 0x86), ('\u{0067}', 0x87),
        ('\u{0068}', 0x88), ('\u{0069}', 0x89), ('\u{006a}', 0x91), ('\u{006b}', 0x92),
        ('\u{006c}', 0x93), ('\u{006d}', 0x94), ('\u{006e}', 0x95), ('\u{006f}', 0x96),
        ('\u{0070}', 0x97), ('\u{0071}', 0x98), ('\u{0072}', 0x99), ('\u{0073}', 0xa2),
        ('\u{0074}', 0xa3), ('\u{0075}', 0xa4), ('\u{0076}', 0xa5), ('\u{0077}', 0xa6),
        ('\u{0078}', 0xa7), ('\u{0079}', 0xa8), ('\u{007a}', 0xa9), ('\u{007b}', 0xc0),
        ('\u{007c}', 0xbb), ('\u{007d}', 0xd0), ('\u{007e}', 0xa1), ('\u{007f}', 0x07),
        ('\u{0080}', 0x20), ('\u{0081}', 0x21), ('\u{0082}', 0x22), ('\u{0083}', 0x23),
        ('\u{0084}', 0x24), ('\u{0085}', 0x15), ('\u{0086}', 0x06), ('\u{0087}', 0x17),
        ('\u{0088}', 0x28), ('\u{0089}', 0x29), ('\u{008a}', 0x2a), ('\u{008b}', 0x2b),
        ('\u{008c}', 0x2c), ('\u{008d}', 0x09), ('\u{008e}', 0x0a), ('\u{008f}', 0x1b),
        ('\u{0090}', 0x30), ('\u{0091}', 0x31), ('\u{0092}', 0x1a), ('\u{0093}', 0x33),
        ('\u{0094}', 0x34), ('\u{0095}', 0x35), ('\u{0096}', 0x36), ('\u{0097}', 0x08),
        ('\u{0098}', 0x38), ('\u{0099}', 0x39), ('\u{009a}', 0x3a), ('\u{009b}', 0x3b),
        ('\u{009c}', 0x04), ('\u{009d}', 0x14), ('\u{009e}', 0x3e), ('\u{009f}', 0xff),
        ('\u{00a0}', 0x41), ('\u{00a1}', 0xaa), ('\u{00a2}', 0xb0), ('\u{00a3}', 0xb1),
        ('\u{00a4}', 0x9f), ('\u{00a5}', 0xb2), ('\u{00a6}', 0x6a), ('\u{00a7}', 0xb5),
        ('\u{00a8}', 0xbd), ('\u{00a9}', 0xb4), ('\u{00aa}', 0x9a), ('\u{00ab}', 0x8a),
        ('\u{00ac}', 0xba), ('\u{00ad}', 0xca), ('\u{00ae}', 0xaf), ('\u{00af}', 0xbc),
        ('\u{00b0}', 0x90), ('\u{00b1}', 0x8f), ('\u{00b2}', 0xea), ('\u{00b3}', 0xfa),
        ('\u{00b4}', 0xbe), ('\u{00b5}', 0xa0), ('\u{00b6}', 0xb6), ('\u{00b7}', 0xb3),
        ('\u{00b8}', 0x9d), ('\u{00b9}', 0xda), ('\u{00ba}', 0x9b), ('\u{00bb}', 0x8b),
        ('\u{00bc}', 0xb7), ('\u{00bd}', 0xb8), ('\u{00be}', 0xb9), ('\u{00bf}', 0xab),
        ('\u{00c0}', 0x64), ('\u{00c1}', 0x65), ('\u{00c2}', 0x62), ('\u{00c3}', 0x66),
        ('\u{00c4}', 0x63), ('\u{00c5}', 0x67), ('\u{00c6}', 0x9e), ('\u{00c7}', 0x68),
        ('\u{00c8}', 0x74), ('\u{00c9}', 0x71), ('\u{00ca}', 0x72), ('\u{00cb}', 0x73),
        ('\u{00cc}', 0x78), ('\u{00cd}', 0x75), ('\u{00ce}', 0x76), ('\u{00cf}', 0x77),
        ('\u{00d0}', 0xac), ('\u{00d1}', 0x69), ('\u{00d2}', 0xed), ('\u{00d3}', 0xee),
        ('\u{00d4}', 0xeb), ('\u{00d5}', 0xef), ('\u{00d6}', 0xec), ('\u{00d7}', 0xbf),
        ('\u{00d8}', 0x80), ('\u{00d9}', 0xfd), ('\u{00da}', 0xfe), ('\u{00db}', 0xfb),
        ('\u{00dc}', 0xfc), ('\u{00dd}', 0xad), ('\u{00de}', 0xae), ('\u{00df}', 0x59),
        ('\u{00e0}', 0x44), ('\u{00e1}', 0x45), ('\u{00e2}', 0x42), ('\u{00e3}', 0x46),
        ('\u{00e4}', 0x43), ('\u{00e5}', 0x47), ('\u{00e6}', 0x9c), ('\u{00e7}', 0x48),
        ('\u{00e8}', 0x54), ('\u{00e9}', 0x51), ('\u{00ea}', 0x52), ('\u{00eb}', 0x53),
        ('\u{00ec}', 0x58), ('\u{00ed}', 0x55), ('\u{00ee}', 0x56), ('\u{00ef}', 0x57),
        ('\u{00f0}', 0x8c), ('\u{00f1}', 0x49), ('\u{00f2}', 0xcd), ('\u{00f3}', 0xce),
        ('\u{00f4}', 0xcb), ('\u{00f5}', 0xcf), ('\u{00f6}', 0xcc), ('\u{00f7}', 0xe1),
        ('\u{00f8}', 0x70), ('\u{00f9}', 0xdd), ('\u{00fa}', 0xde), ('\u{00fb}', 0xdb),
        ('\u{00fc}', 0xdc), ('\u{00fd}', 0x8d), ('\u{00fe}', 0x8e), ('\u{00ff}', 0xdf),
    ],
};

pub(crate) static IBM01140: SingleByteTable = SingleByteTable {
    decode: [
        '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}',
        '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
        '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
        '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
        '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}',
        '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
        '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
        '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
        '\u{0020}', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}',
        '\u{00e7}', '\u{00f1}', '\u{00a2}', '\u{002e}', '\u{003c}', '\u{0028}', '\u{002b}', '\u{007c}',
        '\u{0026}', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
        '\u{00ec}', '\u{00df}', '\u{0021}', '\u{0024}', '\u{002a}', '\u{0029}', '\u{003b}', '\u{00ac}',
        '\u{002d}', '\u{002f}', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}',
        '\u{00c7}', '\u{00d1}', '\u{00a6}', '\u{002c}', '\u{0025}', '\u{005f}', '\u{003e}', '\u{003f}',
        '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
        '\u{00cc}', '\u{0060}', '\u{003a}', '\u{0023}', '\u{0040}', '\u{0027}', '\u{003d}', '\u{0022}',
        '\u{00d8}', '\u{0061}', '\u{0062}', '\u{0063}', '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}',
        '\u{0068}', '\u{0069}', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
        '\u{00b0}', '\u{006a}', '\u{006b}', '\u{006c}', '\u{006d}', '\u{006e}', '\u{006f}', '\u{0070}',
        '\u{0071}', '\u{0072}', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{20ac}',
        '\u{00b5}', '\u{007e}', '\u{0073}', '\u{0074}', '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}',
        '\u{0079}', '\u{007a}', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
        '\u{005e}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
        '\u{00bd}', '\u{00be}', '\u{005b}', '\u{005d}', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
        '\u{007b}', '\u{0041}', '\u{0042}', '\u{0043}', '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}',
        '\u{0048}', '\u{0049}', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
        '\u{007d}', '\u{004a}', '\u{004b}', '\u{004c}', '\u{004d}', '\u{004e}', '\u{004f}', '\u{0050}',
        '\u{0051}', '\u{0052}', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
        '\u{005c}', '\u{00f7}', '\u{0053}', '\u{0054}', '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}',
        '\u{0059}', '\u{005a}', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
        '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}',
        '\u{0038}', '\u{0039}', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
    ],
    encode: [
        ('\u{0000}', 0x00), ('\u{0001}', 0x01), ('\u{0002}', 0x02), ('\u{0003}', 0x03),
        ('\u{0004}', 0x37), ('\u{0005}', 0x2d), ('\u{0006}', 0x2e), ('\u{0007}', 0x2f),
        ('\u{0008}', 0x16), ('\u{0009}', 0x05), ('\u{000a}', 0x25), ('\u{000b}', 0x0b),
        ('\u{000c}', 0x0c), ('\u{000d}', 0x0d), ('\u{000e}', 0x0e), ('\u{000f}', 0x0f),
        ('\u{0010}', 0x10), ('\u{0011}', 0x11), ('\u{0012}', 0x12), ('\u{0013}', 0x13),
        ('\u{0014}', 0x3c), ('\u{0015}', 0x3d), ('\u{0016}', 0x32), ('\u{0017}', 0x26),
        ('\u{0018}', 0x18), ('\u{0019}', 0x19), ('\u{001a}', 0x3f), ('\u{001b}', 0x27),
        ('\u{001c}', 0x1c), ('\u{001d}', 0x1d), ('\u{001e}', 0x1e), ('\u{001f}', 0x1f),
        ('\u{0020}', 0x40), ('\u{0021}', 0x5a), ('\u{0022}', 0x7f), ('\u{0023}', 0x7b),
        ('\u{0024}', 0x5b), ('\u{0025}', 0x6c), ('\u{0026}', 0x50), ('\u{0027}', 0x7d),
        ('\u{0028}', 0x4d), ('\u{0029}', 0x5d), ('\u{002a}', 0x5c), ('\u{002b}', 0x4e),
        ('\u{002c}', 0x6b), ('\u{002d}', 0x60), ('\u{002e}', 0x4b), ('\u{002f}', 0x61),
        ('\u{0030}', 0xf0), ('\u{0031}', 0xf1), ('\u{0032}', 0xf2), ('\u{0033}', 0xf3),
        ('\u{0034}', 0xf4), ('\u{0035}', 0xf5), ('\u{0036}', 0xf6), ('\u{0037}', 0xf7),
        ('\u{0038}', 0xf8), ('\u{0039}', 0xf9), ('\u{003a}', 0x7a), ('\u{003b}', 0x5e),
        ('\u{003c}', 0x4c), ('\u{003d}', 0x7e), ('\u{003e}', 0x6e), ('\u{003f}', 0x6f),
        ('\u{0040}', 0x7c), ('\u{0041}', 0xc1), ('\u{0042}', 0xc2), ('\u{0043}', 0xc3),
        ('\u{0044}', 0xc4), ('\u{0045}', 0xc5), ('\u{0046}', 0xc6), ('\u{0047}', 0xc7),
        ('\u{0048}', 0xc8), ('\u{0049}', 0xc9), ('\u{004a}', 0xd1), ('\u{004b}', 0xd2),
        ('\u{004c}', 0xd3), ('\u{004d}', 0xd4), ('\u{004e}', 0xd5), ('\u{004f}', 0xd6),
        ('\u{0050}', 0xd7), ('\u{0051}', 0xd8), ('\u{0052}', 0xd9), ('\u{0053}', 0xe2),
        ('\u{0054}', 0xe3), ('\u{0055}', 0xe4), ('\u{0056}', 0xe5), ('\u{0057}', 0xe6),
        ('\u{0058}', 0xe7), ('\u{0059}', 0xe8), ('\u{005a}', 0xe9), ('\u{005b}', 0xba),
        ('\u{005c}', 0xe0), ('\u{005d}', 0xbb), ('\u{005e}', 0xb0), ('\u{005f}', 0x6d),
        ('\u{0060}', 0x79), ('\u{0061}', 0x81), ('\u{0062}', 0x82), ('\u{0063}', 0x83),
        ('\u{0064}', 0x84), ('\u{0065}', 0x85), ('\u{0066}', 0x86), ('\u{0067}', 0x87),
        ('\u{0068}', 0x88), ('\u{0069}', 0x89), ('\u{006a}', 0x91), ('\u{006b}', 0x92),
        ('\u{006c}', 0x93), ('\u{006d}', 0x94), ('\u{006e}', 0x95), ('\u{006f}', 0x96),
        ('\u{0070}', 0x97), ('\u{0071}', 0x98), ('\u{0072}', 0x99), ('\u{0073}', 0xa2),
        ('\u{0074}', 0xa3), ('\u{0075}', 0xa4), ('\u{0076}', 0xa5), ('\u{0077}', 0xa6),
        ('\u{0078}', 0xa7), ('\u{0079}', 0xa8), ('\u{007a}', 0xa9), ('\u{007b}', 0xc0),
        ('\u{007c}', 0x4f), ('\u{007d}', 0xd0), ('\u{007e}', 0xa1), ('\u{007f}', 0x07),
        ('\u{0080}', 0x20), ('\u{0081}', 0x21), ('\u{0082}', 0x22), ('\u{0083}', 0x23),
        ('\u{0084}', 0x24), ('\u{0085}', 0x15), ('\u{0086}', 0x06), ('\u{0087}', 0x17),
        ('\u{0088}', 0x28), ('\u{0089}', 0x29), ('\u{008a}', 0x2a), ('\u{008b}', 0x2b),
        ('\u{008c}', 0x2c), ('\u{008d}', 0x09), ('\u{008e}', 0x0a), ('\u{008f}', 0x1b),
        ('\u{0090}', 0x30), ('\u{0091}', 0x31), ('\u{0092}', 0x1a), ('\u{0093}', 0x33),
        ('\u{0094}', 0x34), ('\u{0095}', 0x35), ('\u{0096}', 0x36), ('\u{0097}', 0x08),
        ('\u{0098}', 0x38), ('\u{0099}', 0x39), ('\u{009a}', 0x3a), ('\u{009b}', 0x3b),
        ('\u{009c}', 0x04), ('\u{009d}', 0x14), ('\u{009e}', 0x3e), ('\u{009f}', 0xff),
        ('\u{00a0}', 0x41), ('\u{00a1}', 0xaa), ('\u{00a2}', 0x4a), ('\u{00a3}', 0xb1),
        ('\u{00a5}', 0xb2), ('\u{00a6}', 0x6a), ('\u{00a7}', 0xb5), ('\u{00a8}', 0xbd),
        ('\u{00a9}', 0xb4), ('\u{00aa}', 0x9a), ('\u{00ab}', 0x8a), ('\u{00ac}', 0x5f),
        ('\u{00ad}', 0xca), ('\u{00ae}', 0xaf), ('\u{00af}', 0xbc), ('\u{00b0}', 0x90),
        ('\u{00b1}', 0x8f), ('\u{00b2}', 0xea), ('\u{00b3}', 0xfa), ('\u{00b4}', 0xbe),
        ('\u{00b5}', 0xa0), ('\u{00b6}', 0xb6), ('\u{00b7}', 0xb3), ('\u{00b8}', 0x9d),
        ('\u{00b9}', 0xda), ('\u{00ba}', 0x9b), ('\u{00bb}', 0x8b), ('\u{00bc}', 0xb7),
        ('\u{00bd}', 0xb8), ('\u{00be}', 0xb9), ('\u{00bf}', 0xab), ('\u{00c0}', 0x64),
        ('\u{00c1}', 0x65), ('\u{00c2}', 0x62), ('\u{00c3}', 0x66), ('\u{00c4}', 0x63),
        ('\u{00c5}', 0x67), ('\u{00c6}', 0x9e), ('\u{00c7}', 0x68), ('\u{00c8}', 0x74),
        ('\u{00c9}', 0x71), ('\u{00ca}', 0x72), ('\u{00cb}', 0x73), ('\u{00cc}', 0x78),
        ('\u{00cd}', 0x75), ('\u{00ce}', 0x76), ('\u{00cf}', 0x77), ('\u{00d0}', 0xac),
        ('\u{00d1}', 0x69), ('\u{00d2}', 0xed), ('\u{00d3}', 0xee), ('\u{00d4}', 0xeb),
        ('\u{00d5}', 0xef), ('\u{00d6}', 0xec), ('\u{00d7}', 0xbf), ('\u{00d8}', 0x80),
        ('\u{00d9}', 0xfd), ('\u{00da}', 0xfe), ('\u{00db}', 0xfb), ('\u{00dc}', 0xfc),
        ('\u{00dd}', 0xad), ('\u{00de}', 0xae), ('\u{00df}', 0x59), ('\u{00e0}', 0x44),
        ('\u{00e1}', 0x45), ('\u{00e2}', 0x42), ('\u{00e3}', 0x46), ('\u{00e4}', 0x43),
        ('\u{00e5}', 0x47), ('\u{00e6}', 0x9c), ('\u{00e7}', 0x48), ('\u{00e8}', 0x54),
        ('\u{00e9}', 0x51), ('\u{00ea}', 0x52), ('\u{00eb}', 0x53), ('\u{00ec}', 0x58),
        ('\u{00ed}', 0x55), ('\u{00ee}', 0x56), ('\u{00ef}', 0x57), ('\u{00f0}', 0x8c),
        ('\u{00f1}', 0x49), ('\u{00f2}', 0xcd), ('\u{00f3}', 0xce), ('\u{00f4}', 0xcb),
        ('\u{00f5}', 0xcf), ('\u{00f6}', 0xcc), ('\u{00f7}', 0xe1), ('\u{00f8}', 0x70),
        ('\u{00f9}', 0xdd), ('\u{00fa}', 0xde), ('\u{00fb}', 0xdb), ('\u{00fc}', 0xdc),
        ('\u{00fd}', 0x8d), ('\u{00fe}', 0x8e), ('\u{00ff}', 0xdf), ('\u{20ac}', 0x9f),
    ],
};
