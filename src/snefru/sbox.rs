//! Standard Snefru 2.0 substitution tables.
//!
//! Two 256-entry boxes per round, eight rounds, flattened to 512 words per
//! round exactly as the reference implementation lays them out. These values
//! are fixed by the algorithm; changing any of them changes every digest.

pub(super) const SBOX: [[u32; 512]; 8] = [
	[
		0x64f9001b, 0xfeddcdf6, 0x7c8ff1e2, 0x11d71514, 0x8b8c18d3, 0xdddf881e, 0x6eab5056, 0x88ced8e1,
		0x49148959, 0x69c56fd5, 0xb7994f03, 0x0fbcee3e, 0x3c264940, 0x21557e58, 0xe14b3fc2, 0x2e5cf591,
		0xdceff8ce, 0x092a1648, 0xbe812936, 0xff7b0c6a, 0xd5251037, 0xafa448f1, 0x7dafc95a, 0x1ea69c3f,
		0xa417abe7, 0x5890e423, 0xb0cb70c0, 0xc85025f7, 0x244d97e3, 0x1ff3595f, 0xc4ec6396, 0x59181e17,
		0xe635b477, 0x354e7dbf, 0x796f7753, 0x66eb52cc, 0x77c3f995, 0x32e3a927, 0x80ccaed6, 0x4e2be89d,
		0x375bbd28, 0xad1a3d05, 0x2b1b42b3, 0x16c44c71, 0x4d54bfa8, 0xe57ddc7a, 0xec6d8144, 0x5a71046b,
		0xd8229650, 0x87fc8f24, 0xcbc60e09, 0xb6390366, 0xd9f76092, 0xd393a70b, 0x1d31a08a, 0x9cd971c9,
		0x5c1ef445, 0x86fab694, 0xfdb44165, 0x8eaafcbe, 0x4bcac6eb, 0xfb7a94e5, 0x5789d04e, 0xfa13cf35,
		0x236b8da9, 0x4133f000, 0x6224261c, 0xf412f23b, 0xe75e56a4, 0x30022116, 0xbaf17f1f, 0xd09872f9,
		0xc1a3699c, 0xf1e802aa, 0x0dd145dc, 0x4fdce093, 0x8d8412f0, 0x6cd0f376, 0x3de6b73d, 0x84ba737f,
		0xb43a30f2, 0x44569f69, 0x00e4eaca, 0xb58de3b0, 0x959113c8, 0xd62efee9, 0x90861f83, 0xced69874,
		0x2f793cee, 0xe8571c30, 0x483665d1, 0xab07b031, 0x914c844f, 0x15bf3be8, 0x2c3f2a9a, 0x9eb95fd4,
		0x92e7472d, 0x2297cc5b, 0xee5f2782, 0x5377b562, 0xdb8ebbcf, 0xf961dedd, 0xc59b5c60, 0x1bd3910d,
		0x26d206ad, 0xb28514d8, 0x5ecf6b52, 0x7fea78bb, 0x504879ac, 0xed34a884, 0x36e51d3c, 0x1753741d,
		0x8c47caed, 0x9d0a40ef, 0x3145e221, 0xda27eb70, 0xdf730ba3, 0x183c8789, 0x739ac0a6, 0x9a58dfc6,
		0x54b134c1, 0xac3e242e, 0xcc493902, 0x7b2dda99, 0x8f15bc01, 0x29fd38c7, 0x27d5318f, 0x604aaff5,
		0xf29c6818, 0xc38aa2ec, 0x1019d4c3, 0xa8fb936e, 0x20ed7b39, 0x0b686119, 0x89a0906f, 0x1cc7829e,
		0x9952ef4b, 0x850e9e8c, 0xcd063a90, 0x67002f8e, 0xcfac8cb7, 0xeaa24b11, 0x988b4e6c, 0x46f066df,
		0xca7eec08, 0xc7bba664, 0x831d17bd, 0x63f575e6, 0x9764350e, 0x47870d42, 0x026ca4a2, 0x8167d587,
		0x61b6adab, 0xaa6564d2, 0x70da237b, 0x25e1c74a, 0xa1c901a0, 0x0eb0a5da, 0x7670f741, 0x51c05aea,
		0x933dfa32, 0x0759ff1a, 0x56010ab8, 0x5fdecb78, 0x3f32edf8, 0xaebedbb9, 0x39f8326d, 0xd20858c5,
		0x9b638be4, 0xa572c80a, 0x28e0a19f, 0x432099fc, 0x3a37c3cd, 0xbf95c585, 0xb392c12a, 0x6aa707d7,
		0x52f66a61, 0x12d483b1, 0x96435b5e, 0x3e75802b, 0x3ba52b33, 0xa99f51a5, 0xbda1e157, 0x78c2e70c,
		0xfcae7ce0, 0xd1602267, 0x2affac4d, 0x4a510947, 0x0ab2b83a, 0x7a04e579, 0x340dfd80, 0xb916e922,
		0xe29d5e9b, 0xf5624af4, 0x4ca9d9af, 0x6bbd2cfe, 0xe3b7f620, 0xc2746e07, 0x5b42b9b6, 0xa06919bc,
		0xf0f2c40f, 0x72217ab5, 0x14c19df3, 0xf3802dae, 0xe094beb4, 0xa2101aff, 0x0529575d, 0x55cdb27c,
		0xa33bddb2, 0x6528b37d, 0x740c05db, 0xe96a62c4, 0x40782846, 0x6d30d706, 0xbbf48e2c, 0xbce2d3de,
		0x049e37fa, 0x01b5e634, 0x2d886d8d, 0x7e5a2e7e, 0xd7412013, 0x06e90f97, 0xe45d3eba, 0xb8ad3386,
		0x13051b25, 0x0c035354, 0x71c89b75, 0xc638fbd0, 0x197f11a1, 0xef0f08fb, 0xf8448651, 0x38409563,
		0x452f4443, 0x5d464d55, 0x03d8764c, 0xb1b8d638, 0xa70bba2f, 0x94b3d210, 0xeb6692a7, 0xd409c2d9,
		0x68838526, 0xa6db8a15, 0x751f6c98, 0xde769a88, 0xc9ee4668, 0x1a82a373, 0x0896aa49, 0x42233681,
		0xf62c55cb, 0x9f1c5404, 0xf74fb15c, 0xc06e4312, 0x6ffe5d72, 0x8aa8678b, 0x337cd129, 0x8211cefd,
		0x074a1d09, 0x52a10e5a, 0x9275a3f8, 0x4b82506c, 0x37df7e1b, 0x4c78b3c5, 0xcefab1da, 0xf472267e,
		0xb63045f6, 0xd66a1fc0, 0x400298e3, 0x27e60c94, 0x87d2f1b8, 0xdf9e56cc, 0x45cd1803, 0x1d35e098,
		0xcce7c736, 0x03483bf1, 0x1f7307d7, 0xc6e8f948, 0xe613c111, 0x3955c6ff, 0x1170ed7c, 0x8e95da41,
		0x99c31bf4, 0xa4da8021, 0x7b5f94fb, 0xdd0da51f, 0x6562aa77, 0x556bcb23, 0xdb1bacc6, 0x798040b9,
		0xbfe5378f, 0x731d55e6, 0xdaa5bfee, 0x389bbc60, 0x1b33fba4, 0x9c567204, 0x36c26c68, 0x77ee9d69,
		0x8aeb3e88, 0x2d50b5ce, 0x9579e790, 0x42b13cfc, 0x33fbd32b, 0xee0503a7, 0xb5862824, 0x15e41ead,
		0xc8412ef7, 0x9d441275, 0x2fcec582, 0x5ff483b7, 0x8f3931df, 0x2e5d2a7b, 0x49467bf9, 0x0653dea9,
		0x2684ce35, 0x7e655e5c, 0xf12771d8, 0xbb15cc67, 0xab097ca1, 0x983dcf52, 0x10ddf026, 0x21267f57,
		0x2c58f6b4, 0x31043265, 0x0bab8c01, 0xd5492099, 0xacaae619, 0x944ce54a, 0xf2d13d39, 0xadd3fc32,
		0xcda08a40, 0xe2b0d451, 0x9efe08ae, 0xb9d50fd2, 0xea5cd7fd, 0xc9a749dd, 0x13ea2253, 0x832debaa,
		0x24be640f, 0xe03e926a, 0x29e01cde, 0x8bf59f18, 0x0f9d00b6, 0xe1238b46, 0x1e7d8e34, 0x93619adb,
		0x76b32f9f, 0xbd972cec, 0xe31fa976, 0xa68fbb10, 0xfb3ba49d, 0x8587c41d, 0xa5add1d0, 0xf3cf84bf,
		0xd4e11150, 0xd9ffa6bc, 0xc3f6018c, 0xaef10572, 0x74a64b2f, 0xe7dc9559, 0x2aae35d5, 0x5b6f587f,
		0xa9e353fe, 0xca4fb674, 0x04ba24a8, 0xe5c6875f, 0xdcbc6266, 0x6bc5c03f, 0x661eef02, 0xed740bab,
		0x058e34e4, 0xb7e946cf, 0x88698125, 0x72ec48ed, 0xb11073a3, 0xa13485eb, 0xa2a2429c, 0xfa407547,
		0x50b76713, 0x5418c37d, 0x96192da5, 0x170bb04b, 0x518a021e, 0xb0ac13d1, 0x0963fa2a, 0x4a6e10e1,
		0x58472bdc, 0xf7f8d962, 0x979139ea, 0x8d856538, 0xc0997042, 0x48324d7a, 0x447623cb, 0x8cbbe364,
		0x6e0c6b0e, 0xd36d63b0, 0x3f244c84, 0x3542c971, 0x2b228dc1, 0xcb0325bb, 0xf8c0d6e9, 0xde11066b,
		0xa8649327, 0xfc31f83e, 0x7dd80406, 0xf916dd61, 0xd89f79d3, 0x615144c2, 0xebb45d31, 0x28002958,
		0x56890a37, 0xf05b3808, 0x123ae844, 0x86839e16, 0x914b0d83, 0xc506b43c, 0xcf3cba5e, 0x7c60f5c9,
		0x22deb2a0, 0x5d9c2715, 0xc77ba0ef, 0x4f45360b, 0xc1017d8b, 0xe45adc29, 0xa759909b, 0x412cd293,
		0xd7d796b1, 0x00c8ff30, 0x23a34a80, 0x4ec15c91, 0x714e78b5, 0x47b9e42e, 0x78f3ea4d, 0x7f078f5b,
		0x346c593a, 0xa3a87a1a, 0x9bcbfe12, 0x3d439963, 0xb2ef6d8e, 0xb8d46028, 0x6c2fd5ca, 0x62675256,
		0x01f2a2f3, 0xbc96ae0a, 0x709a8920, 0xb4146e87, 0x6308b9e2, 0x64bda7ba, 0xafed6892, 0x6037f2a2,
		0xf52969e0, 0x0adb43a6, 0x82811400, 0x90d0bdf0, 0x19c9549e, 0x203f6a73, 0x1accaf4f, 0x89714e6d,
		0x164d4705, 0x67665f07, 0xec206170, 0x0c2182b2, 0xa02b9c81, 0x53289722, 0xf6a97686, 0x140e4179,
		0x9f778849, 0x9a88e15d, 0x25cadb54, 0xd157f36f, 0x32a421c3, 0xb368e98a, 0x5a92cd0d, 0x757aa8d4,
		0xc20ac278, 0x08b551c7, 0x849491e8, 0x4dc75ad6, 0x697c33be, 0xbaf0ca33, 0x46125b4e, 0x59d677b3,
		0x30d9c8f2, 0xd0af860c, 0x1c7fd0fa, 0xfe0ff72c, 0x5c8d6f43, 0x57fdec3b, 0x6ab6ad97, 0xd22adf89,
		0x18171785, 0x02bfe22d, 0x6db80917, 0x80b216af, 0xe85e4f9a, 0x7a1c306e, 0x6fc49bf5, 0x3af7a11c,
		0x81e215e7, 0x68363fcd, 0x3e9357c8, 0xef52fd55, 0x3b8bab4c, 0x3c8cf495, 0xbefceebd, 0xfd25b714,
		0xc498d83d, 0x0d2e1a8d, 0xe9f966ac, 0x0e387445, 0x435419e5, 0x5e7ebec4, 0xaa90b8d9, 0xff1a3a96,
	],
	[
		0x4a8fe4e3, 0xf27d99cd, 0xd04a40ca, 0xcb5ff194, 0x3668275a, 0xff4816be, 0xa78b394c, 0x4c6be9db,
		0x4eec38d2, 0x4296ec80, 0xcdce96f8, 0x888c2f38, 0xe75508f5, 0x7b916414, 0x060aa14a, 0xa214f327,
		0xbe608daf, 0x1ebbdec2, 0x61f98ce9, 0xe92156fe, 0x4f22d7a3, 0x3f76a8d9, 0x559a4b33, 0x38ad2959,
		0xf3f17e9e, 0x85e1ba91, 0xe5eba6fb, 0x73dcd48c, 0xf5c3ff78, 0x481b6058, 0x8a3297f7, 0x8f1f3bf4,
		0x93785ab2, 0x477a4a5b, 0x6334eb5d, 0x6d251b2e, 0x74a9102d, 0x07e38ffa, 0x915c9c62, 0xccc275ea,
		0x6be273ec, 0x3ebddd70, 0xd895796c, 0xdc54a91b, 0xc9afdf81, 0x23633f73, 0x275119b4, 0xb19f6b67,
		0x50756e22, 0x2bb152e2, 0x76ea46a2, 0xa353e232, 0x2f596ad6, 0x0b1edb0b, 0x02d3d9a4, 0x78b47843,
		0x64893e90, 0x40f0caad, 0xf68d3ad7, 0x46fd1707, 0x1c9c67ef, 0xb5e086de, 0x96ee6ca6, 0x9aa34774,
		0x1ba4f48a, 0x8d01abfd, 0x183ee1f6, 0x5ff8aa7a, 0x17e4faae, 0x303983b0, 0x6c08668b, 0xd4ac4382,
		0xe6c5849f, 0x92fefb53, 0xc1cac4ce, 0x43501388, 0x441118cf, 0xec4fb308, 0x53a08e86, 0x9e0fe0c5,
		0xf91c1525, 0xac45be05, 0xd7987cb5, 0x49ba1487, 0x57938940, 0xd5877648, 0xa958727f, 0x58dfe3c3,
		0xf436cf77, 0x399e4d11, 0xf0a5bfa9, 0xef61a33b, 0xa64cac60, 0x04a8d0ba, 0x030dd572, 0xb83d320f,
		0xcab23045, 0xe366f2f0, 0x815d008d, 0xc897a43a, 0x1d352df3, 0xb9cc571d, 0x8bf38744, 0x72209092,
		0xeba124eb, 0xfb99ce5e, 0x3bb94293, 0x28da549c, 0xaab8a228, 0xa4197785, 0x33c70296, 0x25f6259b,
		0x5c85da21, 0xdf15bdee, 0x15b7c7e8, 0xe2abef75, 0xfcc19bc1, 0x417ff868, 0x14884434, 0x62825179,
		0xc6d5c11c, 0x0e4705dc, 0x22700de0, 0xd3d2af18, 0x9be822a0, 0x35b669f1, 0xc42bb55c, 0x0a801252,
		0x115bf0fc, 0x3cd7d856, 0xb43f5f9d, 0xc2306516, 0xa1231c47, 0xf149207e, 0x5209a795, 0x34b3ccd8,
		0x67aefe54, 0x2c83924e, 0x6662cbac, 0x5eedd161, 0x84e681aa, 0x5d57d26b, 0xfa465cc4, 0x7e3ac3a8,
		0xbf7c0cc6, 0xe18a9aa1, 0xc32f0a6f, 0xb22cc00d, 0x3d280369, 0x994e554f, 0x68f480d3, 0xadcff5e6,
		0x3a8eb265, 0x83269831, 0xbd568a09, 0x4bc8ae6a, 0x69f56d2b, 0x0f17eac8, 0x772eb6c7, 0x9f41343c,
		0xab1d0742, 0x826a6f50, 0xfea2097c, 0x1912c283, 0xce185899, 0xe4444839, 0x2d8635d5, 0x65d0b1ff,
		0x865a7f17, 0x326d9fb1, 0x59e52820, 0x0090ade1, 0x753c7149, 0x9ddd8b98, 0xa5a691da, 0x0d0382bb,
		0x8904c930, 0x086cb000, 0x6e69d3bd, 0x24d4e7a7, 0x05244fd0, 0x101a5e0c, 0x6a947dcb, 0xe840f77b,
		0x7d0c5003, 0x7c370f1f, 0x805245ed, 0xe05e3d3f, 0x7906880e, 0xbabfcd35, 0x1a7ec697, 0x8c052324,
		0x0c6ec8df, 0xd129a589, 0xc7a75b02, 0x12d81de7, 0xd9be2a66, 0x1f4263ab, 0xde73fdb6, 0x2a00680a,
		0x56649e36, 0x3133ed55, 0x90fa0bf2, 0x2910a02a, 0x949d9d46, 0xa0d1dcdd, 0xcfc9b7d4, 0xd2677be5,
		0x95cb36b3, 0x13cd9410, 0xdbf73313, 0xb7c6e8c0, 0xf781414b, 0x510b016d, 0xb0de1157, 0xd6b0f62c,
		0xbb074ecc, 0x7f1395b7, 0xee792cf9, 0xea6fd63e, 0x5bd6938e, 0xaf02fc64, 0xdab57ab8, 0x8edb3784,
		0x8716318f, 0x164d1a01, 0x26f26141, 0xb372e6b9, 0xf8fc2b06, 0x7ac00e04, 0x3727b89a, 0x97e9bca5,
		0x9c2a742f, 0xbc3b1f7d, 0x7165b471, 0x609b4c29, 0x20925351, 0x5ae72112, 0x454be5d1, 0xc0ffb95f,
		0xdd0ef919, 0x6f2d70c9, 0x0974c5bf, 0x98aa6263, 0x01d91e4d, 0x2184bb6e, 0x70c43c1e, 0x4d435915,
		0xae7b8523, 0xb6fb06bc, 0x5431ee76, 0xfdbc5d26, 0xed77493d, 0xc5712ee4, 0xa8380437, 0x2eef261a,
		0x5a79392b, 0xb8af32c2, 0x41f7720a, 0x833a61ec, 0x13dfedac, 0xc4990bc4, 0xdc0f54bc, 0xfedd5e88,
		0x80da1881, 0x4dea1afd, 0xfd402cc6, 0xae67cc7a, 0xc5238525, 0x8ea01254, 0xb56b9bd5, 0x862fbd6d,
		0xac8575d3, 0x6fba3714, 0xda7ebf46, 0x59cd5238, 0x8ac9dbfe, 0x353729fc, 0xe497d7f2, 0xc3ab84e0,
		0xf05a114b, 0x7b887a75, 0xedc603dd, 0x5e6fe680, 0x2c84b399, 0x884eb1da, 0x1cb8c8bf, 0xaa51098a,
		0xc862231c, 0x8bac2221, 0x21b387e5, 0x208a430d, 0x2a3f0f8b, 0xa5ff9cd2, 0x6012a2ea, 0x147a9ee7,
		0xf62a501d, 0xb4b2e51a, 0x3ef3484c, 0xc0253c59, 0x2b82b536, 0x0aa9696b, 0xbe0c109b, 0xc70b7929,
		0xce3e8a19, 0x2f66950e, 0x459f1c2c, 0xe68fb93d, 0xa3c3ff3e, 0x62b45c62, 0x300991cb, 0x01914c57,
		0x7f7bc06a, 0x182831f5, 0xe7b74bca, 0xfa50f6d0, 0x523caa61, 0xe3a7cf05, 0xe9e41311, 0x280a21d1,
		0x6a4297e1, 0xf24dc67e, 0xfc3189e6, 0xb72bf34f, 0x4b1e67af, 0x543402ce, 0x79a59867, 0x0648e02a,
		0x00a3ac17, 0xc6208d35, 0x6e7f5f76, 0xa45bb4be, 0xf168fa63, 0x3f4125f3, 0xf311406f, 0x02706565,
		0xbfe58022, 0x0cfcfdd9, 0x0735a7f7, 0x8f049092, 0xd98edc27, 0xf5c5d55c, 0xe0f201db, 0x0dcafc9a,
		0x7727fb79, 0xaf43abf4, 0x26e938c1, 0x401b26a6, 0x900720fa, 0x2752d97b, 0xcff1d1b3, 0xa9d9e424,
		0x42db99ab, 0x6cf8be5f, 0xe82cebe3, 0x3afb733b, 0x6b734eb6, 0x1036414a, 0x975f667c, 0x049d6377,
		0xba587c60, 0xb1d10483, 0xde1aefcc, 0x1129d055, 0x72051e91, 0x6946d623, 0xf9e86ea7, 0x48768c00,
		0xb0166c93, 0x9956bbf0, 0x1f1f6d84, 0xfb15e18e, 0x033b495d, 0x56e3362e, 0x4f44c53c, 0x747cba51,
		0x89d37872, 0x5d9c331b, 0xd2ef9fa8, 0x254917f8, 0x1b106f47, 0x37d75553, 0xb3f053b0, 0x7dccd8ef,
		0xd30eb802, 0x5889f42d, 0x610206d7, 0x1a7d34a1, 0x92d87dd8, 0xe5f4a315, 0xd1cf0e71, 0xb22dfe45,
		0xb901e8eb, 0x0fc0ce5e, 0x2efa60c9, 0x2de74290, 0x36d0c906, 0x381c70e4, 0x4c6da5b5, 0x3d81a682,
		0x7e381f34, 0x396c4f52, 0x95ad5901, 0x1db50c5a, 0x29982e9e, 0x1557689f, 0x3471ee42, 0xd7e2f7c0,
		0x8795a1e2, 0xbc324d8d, 0xe224c3c8, 0x12837e39, 0xcdee3d74, 0x7ad2143f, 0x0e13d40c, 0x78bd4a68,
		0xa2eb194d, 0xdb9451f9, 0x859b71dc, 0x5c4f5b89, 0xca14a8a4, 0xef92f003, 0x16741d98, 0x33aa4444,
		0x9e967fbb, 0x092e3020, 0xd86a35b8, 0x8cc17b10, 0xe1bf08ae, 0x55693fc5, 0x7680ad13, 0x1e6546e8,
		0x23b6e7b9, 0xee77a4b2, 0x08ed0533, 0x44fd2895, 0xb6393b69, 0x05d6cacf, 0x9819b209, 0xecbbb72f,
		0x9a75779c, 0xeaec0749, 0x94a65aee, 0xbdf52dc3, 0xd6a25d04, 0x82008e4e, 0xa6de160f, 0x9b036afb,
		0x228b3a66, 0x5fb10a70, 0xcc338b58, 0x5378a9df, 0xc908bca9, 0x4959e25b, 0x46909a97, 0x66ae8f6e,
		0xdd0683e9, 0x65f994b4, 0x6426cda5, 0xc24b8840, 0x32539da0, 0x63175650, 0xd0c815ff, 0x50cbc41e,
		0xf7c774a3, 0x31b0c231, 0x8d0d8116, 0x24bef16c, 0xd555d256, 0xdf47ea8c, 0x6d21eccd, 0xa887a012,
		0x84542aed, 0xa7b9c1bd, 0x914c1bb1, 0xa0d5b67d, 0x438ce937, 0x7030f873, 0x71f6b0c7, 0x574576ba,
		0xf8bc4541, 0x9c61d348, 0x1960579d, 0x17c4daad, 0x96a4cb0b, 0xc193f2f6, 0x756eafa2, 0x7c1d2f94,
		0xf4fe2b43, 0xcb86e33a, 0xebd4c728, 0x9d18ae64, 0x9fe13e30, 0x3ce0f5de, 0xaba1f985, 0xaddc2718,
		0x68ce6278, 0xd45e241f, 0xa15c82b7, 0x3b2293d4, 0x739edd32, 0x674a6bf1, 0x5b5d587f, 0x4772deaa,
		0x4a63968f, 0x0be68686, 0x513d6426, 0x939a4787, 0xbba89296, 0x4ec20007, 0x818d0d08, 0xff64dfd6,
	],
	[
		0xcb2297cb, 0xdb48a144, 0xa16cbe4b, 0xbbea1d6c, 0x5af6b6b7, 0x8a8110b6, 0xf9236ef9, 0xc98f83e6,
		0x0f9c65b8, 0x252d4a89, 0xa497f068, 0xa5d7ed2d, 0x94c22845, 0x9da1c8c4, 0xe27c2e2e, 0x6e8ba2b4,
		0xc3dd17fb, 0x498cd482, 0x0dfe6a9f, 0xb0705829, 0x9a1e6dc1, 0xf829717c, 0x07bb8e3a, 0xda3c0b02,
		0x1af82fc7, 0x73b70955, 0x7a04379c, 0x5ee20a28, 0x83712ae5, 0xf4c47c6d, 0xdf72ba56, 0xd794858d,
		0x8c0cf709, 0x18f0f390, 0xb6c69b35, 0xbf2f01db, 0x2fa74dca, 0xd0cd9127, 0xbde66cec, 0x3deebd46,
		0x57c88fc3, 0xcee1406f, 0x0066385a, 0xf3c3444f, 0x3a79d5d5, 0x75751eb9, 0x3e7f8185, 0x521c2605,
		0xe1aaab6e, 0x38ebb80f, 0xbee7e904, 0x61cb9647, 0xea54904e, 0x05ae00e4, 0x2d7ac65f, 0x087751a1,
		0xdcd82915, 0x0921ee16, 0xdd86d33b, 0xd6bd491a, 0x40fbadf0, 0x4232cbd2, 0x33808d10, 0x39098c42,
		0x193f3199, 0x0bc1e47a, 0x4a82b149, 0x02b65a8a, 0x104cdc8e, 0x24a8f52c, 0x685c6077, 0xc79f95c9,
		0x1d11fe50, 0xc08dafcd, 0x7b1a9a03, 0x1c1f11d8, 0x84250e7f, 0x979db248, 0xebdc0501, 0xb9553395,
		0xe3c05ea8, 0xb1e51c4c, 0x13b0e681, 0x3b407766, 0x36db3087, 0xee17c9fc, 0x6c53ecf2, 0xadccc58f,
		0xc427660b, 0xefd5867d, 0x9b6d54a5, 0x6ff1aeff, 0x8e787952, 0x9e2bffe0, 0x8761d034, 0xe00bdbad,
		0xae99a8d3, 0xcc03f6e2, 0xfd0ed807, 0x0e508ae3, 0xb74182ab, 0x4349245d, 0xd120a465, 0xb246a641,
		0xaf3b7ab0, 0x2a6488bb, 0x4b3a0d1f, 0xe7c7e58c, 0x3faff2eb, 0x90445ffd, 0xcf38c393, 0x995d07e7,
		0xf24f1b36, 0x356f6891, 0x6d6ebcbe, 0x8da9e262, 0x50fd520e, 0x5bca9e1e, 0x37472cf3, 0x69075057,
		0x7ec5fded, 0x0cab892a, 0xfb2412ba, 0x1728debf, 0xa000a988, 0xd843ce79, 0x042e20dd, 0x4fe8f853,
		0x56659c3c, 0x2739d119, 0xa78a6120, 0x80960375, 0x70420611, 0x85e09f78, 0xabd17e96, 0x1b513eaf,
		0x1e01eb63, 0x26ad2133, 0xa890c094, 0x7613cf60, 0x817e781b, 0xa39113d7, 0xe957fa58, 0x4131b99e,
		0x28b1efda, 0x66acfba7, 0xff68944a, 0x77a44fd1, 0x7f331522, 0x59ffb3fa, 0xa6df935b, 0xfa12d9df,
		0xc6bf6f3f, 0x89520cf6, 0x659edd6a, 0x544da739, 0x8b052538, 0x7c30ea21, 0xc2345525, 0x15927fb2,
		0x144a436b, 0xba107b8b, 0x1219ac97, 0x06730432, 0x31831ab3, 0xc55a5c24, 0xaa0fcd3e, 0xe5606be8,
		0x5c88f19b, 0x4c0841ee, 0x1fe37267, 0x11f9c4f4, 0x9f1b9dae, 0x864e76d0, 0xe637c731, 0xd97d23a6,
		0x32f53d5c, 0xb8161980, 0x93fa0f84, 0xcaef0870, 0x8874487e, 0x98f2cc73, 0x645fb5c6, 0xcd853659,
		0x2062470d, 0x16ede8e9, 0x6b06dab5, 0x78b43900, 0xfc95b786, 0x5d8e7de1, 0x465b5954, 0xfe7ba014,
		0xf7d23f7b, 0x92bc8b18, 0x03593592, 0x55cef4f7, 0x74b27317, 0x79de1fc2, 0xc8a0bfbd, 0x229398cc,
		0x62a602ce, 0xbcb94661, 0x5336d206, 0xd2a375fe, 0x6a6ab483, 0x4702a5a4, 0xa2e9d73d, 0x23a2e0f1,
		0x9189140a, 0x581d18dc, 0xb39a922b, 0x82356212, 0xd5f432a9, 0xd356c2a3, 0x5f765b4d, 0x450afcc8,
		0x4415e137, 0xe8ecdfbc, 0xed0de3ea, 0x60d42b13, 0xf13df971, 0x71fc5da2, 0xc1455340, 0xf087742f,
		0xf55e5751, 0x67b3c1f8, 0xac6b8774, 0x7dcfaaac, 0x95983bc0, 0x489bb0b1, 0x2c184223, 0x964b6726,
		0x2bd3271c, 0x72266472, 0xded64530, 0x0a2aa343, 0xd4f716a0, 0xb4dad6d9, 0x2184345e, 0x512c990c,
		0x29d92d08, 0x2ebe709a, 0x01144c69, 0x34584b9d, 0xe4634ed6, 0xecc963cf, 0x3c6984aa, 0x4ed056ef,
		0x9ca56976, 0x8f3e80d4, 0xb5bae7c5, 0x30b5caf5, 0x63f33a64, 0xa9e4bbde, 0xf6b82298, 0x4d673c1d,
		0x4b4f1121, 0xba183081, 0xc784f41f, 0xd17d0bac, 0x083d2267, 0x37b1361e, 0x3581ad05, 0xfda2f6bc,
		0x1e892cdd, 0xb56d3c3a, 0x32140e46, 0x138d8aab, 0xe14773d4, 0x5b0e71df, 0x5d1fe055, 0x3fb991d3,
		0xf1f46c71, 0xa325988c, 0x10f66e80, 0xb1006348, 0x726a9f60, 0x3b67f8ba, 0x4e114ef4, 0x05c52115,
		0x4c5ca11c, 0x99e1efd8, 0x471b83b3, 0xcbf7e524, 0x43ad82f5, 0x690ca93b, 0xfaa61bb2, 0x12a832b5,
		0xb734f943, 0xbd22aea7, 0x88fec626, 0x5e80c3e7, 0xbe3eaf5e, 0x44617652, 0xa5724475, 0xbb3b9695,
		0x7f3fee8f, 0x964e7deb, 0x518c052d, 0x2a0bbc2b, 0xc2175f5c, 0x9a7b3889, 0xa70d8d0c, 0xeaccdd29,
		0xcccd6658, 0x34bb25e6, 0xb8391090, 0xf651356f, 0x52987c9e, 0x0c16c1cd, 0x8e372d3c, 0x2fc6ebbd,
		0x6e5da3e3, 0xb0e27239, 0x5f685738, 0x45411786, 0x067f65f8, 0x61778b40, 0x81ab2e65, 0x14c8f0f9,
		0xa6b7b4ce, 0x4036eaec, 0xbf62b00a, 0xecfd5e02, 0x045449a6, 0xb20afd28, 0x2166d273, 0x0d13a863,
		0x89508756, 0xd51a7530, 0x2d653f7a, 0x3cdbdbc3, 0x80c9df4f, 0x3d5812d9, 0x53fbb1f3, 0xc0f185c0,
		0x7a3c3d7e, 0x68646410, 0x857607a0, 0x1d12622e, 0x97f33466, 0xdb4c9917, 0x6469607c, 0x566e043d,
		0x79ef1edb, 0x2c05898d, 0xc9578e25, 0xcd380101, 0x46e04377, 0x7d1cc7a9, 0x6552b837, 0x20192608,
		0xb97500c5, 0xed296b44, 0x368648b4, 0x62995cd5, 0x82731400, 0xf9aebd8b, 0x3844c0c7, 0x7c2de794,
		0x33a1a770, 0x8ae528c2, 0x5a2be812, 0x1f8f4a07, 0x2b5ed7ca, 0x937eb564, 0x6fda7e11, 0xe49b5d6c,
		0xb4b3244e, 0x18aa53a4, 0x3a061334, 0x4d6067a3, 0x83ba5868, 0x9bdf4dfe, 0x7449f261, 0x709f8450,
		0xcad133cb, 0xde941c3f, 0xf52ae484, 0x781d77ed, 0x7e4395f0, 0xae103b59, 0x922331bb, 0x42ce50c8,
		0xe6f08153, 0xe7d941d0, 0x5028ed6b, 0xb3d2c49b, 0xad4d9c3e, 0xd201fb6e, 0xa45bd5be, 0xffcb7f4b,
		0x579d7806, 0xf821bb5b, 0x59d592ad, 0xd0be0c31, 0xd4e3b676, 0x0107165a, 0x0fe939d2, 0x49bcaafd,
		0x55ffcfe5, 0x2ec1f783, 0xf39a09a5, 0x3eb42772, 0x19b55a5d, 0x024a0679, 0x8c83b3f7, 0x8642ba1d,
		0xacacd9ea, 0x87d352c4, 0x60931f45, 0xa05f97d7, 0x1cecd42c, 0xe2fcc87b, 0xb60f94e2, 0x67a34b0b,
		0xfcdd40c9, 0x0b150a27, 0xd3ee9e04, 0x582e29e9, 0x4ac22b41, 0x6ac4e1b8, 0xbccaa51a, 0x237af30e,
		0xebc3b709, 0xc4a59d19, 0x284bc98a, 0xe9d41a93, 0x6bfa2018, 0x73b2d651, 0x11f9a2fa, 0xce09bff1,
		0x41a470aa, 0x25888f22, 0x77e754e8, 0xf7330d8e, 0x158eab16, 0xc5d68842, 0xc685a6f6, 0xe5b82fde,
		0x09ea3a96, 0x6dde1536, 0x4fa919da, 0x26c0be9f, 0x9eed6f69, 0xf05555f2, 0xe06fc285, 0x9cd76d23,
		0xaf452a92, 0xefc74cb7, 0x9d6b4732, 0x8be408ee, 0x22401d0d, 0xee6c459d, 0x7587cb82, 0xe8746862,
		0x5cbdde87, 0x98794278, 0x31afb94d, 0xc11e0f2f, 0x30e8fc2a, 0xcf3261ef, 0x1a3023e1, 0xaa2f86cf,
		0xf202e24a, 0x8d08dcff, 0x764837c6, 0xa26374cc, 0x9f7c3e88, 0x949cc57d, 0xdd26a07f, 0xc39efab0,
		0xc8f879a1, 0xdce67bb9, 0xf4b0a435, 0x912c9ae0, 0xd85603e4, 0x953a9bbf, 0xfb8290d6, 0x0aebcd5f,
		0x16206a9a, 0x6c787a14, 0xd9a0f16a, 0x29bf4f74, 0x8f8bce91, 0x0e5a9354, 0xab038cb1, 0x1b8ad11b,
		0xe327ff49, 0x0053da20, 0x90cf51dc, 0xda92fe6d, 0x0390ca47, 0xa8958097, 0xa9dc5baf, 0x3931e3c1,
		0x840446b6, 0x63d069fb, 0xd7460299, 0x7124ecd1, 0x0791e613, 0x485918fc, 0xd635d04c, 0xdf96ac33,
		0x66f2d303, 0x247056ae, 0xa1a7b2a8, 0x27d8cc9c, 0x17b6e998, 0x7bf5590f, 0xfe97f557, 0x5471d8a2,
	],
	[
		0x83a327a1, 0x9f379f51, 0x40a7d007, 0x11307423, 0x224587c1, 0xac27d63b, 0x3b7e64ea, 0x2e1cbfa6,
		0x09996000, 0x03bc0e2c, 0xd4c4478a, 0x4542e0ab, 0xfeda26d4, 0xc1d10fcb, 0x8252f596, 0x4494eb5c,
		0xa362f314, 0xf5ba81fd, 0x75c3a376, 0x4ca214ca, 0xe164dedd, 0x5088fa97, 0x4b0930e0, 0x2fcfb7e8,
		0x33a6f4b2, 0xc7e94211, 0x2d66c774, 0x43be8bae, 0xc663d445, 0x908eb130, 0xf4e3be15, 0x63b9d566,
		0x529396b5, 0x1e1be743, 0x4d5ff63f, 0x985e4a83, 0x71ab9df7, 0xc516c6f5, 0x85c19ab4, 0x1f4daee4,
		0xf2973431, 0xb713dc5e, 0x3f2e159a, 0xc824da16, 0x06bf376a, 0xb2fe23ec, 0xe39b1c22, 0xf1eecb5f,
		0x08e82d52, 0x565686c2, 0xab0aea93, 0xfd47219f, 0xebdbabd7, 0x2404a185, 0x8c7312b9, 0xa8f2d828,
		0x0c8902da, 0x65b42b63, 0xc0bbef62, 0x4e3e4cef, 0x788f8018, 0xee1ebab7, 0x93928f9d, 0x683d2903,
		0xd3b60689, 0xafcb0ddc, 0x88a4c47a, 0xf6dd9c3d, 0x7ea5fca0, 0x8a6d7244, 0xbe11f120, 0x04ff91b8,
		0x8d2dc8c0, 0x27f97fdb, 0x7f9e1f47, 0x1734f0c7, 0x26f3ed8e, 0x0df8f2bf, 0xb0833d9e, 0xe420a4e5,
		0xa423cae6, 0x95616772, 0x9ae6c049, 0x075941f2, 0xd8e12812, 0x000f6f4f, 0x3c0d6b05, 0x6cef921c,
		0xb82bc264, 0x396cb008, 0x5d608a6f, 0x6d7782c8, 0x186550aa, 0x6b6fec09, 0x28e70b13, 0x57ce5688,
		0xecd3af84, 0x23335a95, 0x91f40cd2, 0x7b6a3b26, 0xbd32b3b6, 0x3754a6fb, 0x8ed088f0, 0xf867e87c,
		0x20851746, 0x6410f9c6, 0x35380442, 0xc2ca10a7, 0x1adea27f, 0x76bddd79, 0x92742cf4, 0x0e98f7ee,
		0x164e931d, 0xb9c835b3, 0x69060a99, 0xb44c531e, 0xfa7b66fe, 0xc98a5b53, 0x7d95aae9, 0x302f467b,
		0x74b811de, 0xf3866abd, 0xb5b3d32d, 0xfc3157a4, 0xd251fe19, 0x0b5d8eac, 0xda71ffd5, 0x47ea05a3,
		0x05c6a9e1, 0xca0ee958, 0x9939034d, 0x25dc5edf, 0x79083cb1, 0x86768450, 0xcf757d6d, 0x5972b6bc,
		0xa78d59c9, 0xc4ad8d41, 0x2a362ad3, 0xd1179991, 0x601407ff, 0xdcf50917, 0x587069d0, 0xe0821ed6,
		0xdbb59427, 0x73911a4b, 0x7c904fc3, 0x844afb92, 0x6f8c955d, 0xe8c0c5bb, 0xb67ab987, 0xa529d96c,
		0xf91f7181, 0x618b1b06, 0xe718bb0c, 0x8bd7615b, 0xd5a93a59, 0x54aef81b, 0x772136e3, 0xce44fd9c,
		0x10cda57e, 0x87d66e0b, 0x3d798967, 0x1b2c1804, 0x3edfbd68, 0x15f6e62b, 0xef68b854, 0x3896db35,
		0x12b7b5e2, 0xcb489029, 0x9e4f98a5, 0x62eb77a8, 0x217c24a2, 0x964152f6, 0x49b2080a, 0x53d23ee7,
		0x48fb6d69, 0x1903d190, 0x9449e494, 0xbf6e7886, 0xfb356cfa, 0x3a261365, 0x424bc1eb, 0xa1192570,
		0x019ca782, 0x9d3f7e0e, 0x9c127575, 0xedf02039, 0xad57bcce, 0x5c153277, 0x81a84540, 0xbcaa7356,
		0xccd59b60, 0xa62a629b, 0xa25ccd10, 0x2b5b65cf, 0x1c535832, 0x55fd4e3a, 0x31d9790d, 0xf06bc37d,
		0x4afc1d71, 0xaeed5533, 0xba461634, 0xbb694b78, 0x5f3a5c73, 0x6a3c764a, 0x8fb0cca9, 0xf725684c,
		0x4fe5382f, 0x1d0163af, 0x5aa07a8f, 0xe205a8ed, 0xc30bad38, 0xff22cf1f, 0x72432e2e, 0x32c2518b,
		0x3487ce4e, 0x7ae0ac02, 0x709fa098, 0x0a3b395a, 0x5b4043f8, 0xa9e48c36, 0x149a8521, 0xd07dee6b,
		0x46acd2f3, 0x8958dffc, 0xb3a1223c, 0xb11d31c4, 0xcd7f4d3e, 0x0f28e3ad, 0xe5b100be, 0xaac54824,
		0xe9c9d7ba, 0x9bd47001, 0x80f149b0, 0x66022f0f, 0x020c4048, 0x6efa192a, 0x67073f8d, 0x13ec7bf9,
		0x3655011a, 0xe6afe157, 0xd9845f6e, 0xdecc4425, 0x511ae2cc, 0xdf81b4d8, 0xd7809e55, 0xd6d883d9,
		0x2cc7978c, 0x5e787cc5, 0xdd0033d1, 0xa050c937, 0x97f75dcd, 0x299de580, 0x41e2b261, 0xea5a54f1,
		0x7e672590, 0xbea513bb, 0x2c906fe6, 0x86029c2b, 0x55dc4f74, 0x0553398e, 0x63e09647, 0xcafd0bab,
		0x264c37df, 0x8272210f, 0x67afa669, 0x12d98a5f, 0x8cab23c4, 0x75c68bd1, 0xc3370470, 0x33f37f4e,
		0x283992ff, 0xe73a3a67, 0x1032f283, 0xf5ad9fc2, 0x963f0c5d, 0x664fbc45, 0x202ba41c, 0xc7c02d80,
		0x54731e84, 0x8a1085f5, 0x601d80fb, 0x2f968e55, 0x35e96812, 0xe45a8f78, 0xbd7de662, 0x3b6e6ead,
		0x8097c5ef, 0x070b6781, 0xb1e508f3, 0x24e4fae3, 0xb81a7805, 0xec0fc918, 0x43c8774b, 0x9b2512a9,
		0x2b05ad04, 0x32c2536f, 0xedf236e0, 0x8bc4b0cf, 0xbaceb837, 0x4535b289, 0x0d0e94c3, 0xa5a371d0,
		0xad695a58, 0x39e3437d, 0x9186bffc, 0x21038c3b, 0x0aa9dff9, 0x5d1f06ce, 0x62def8a4, 0xf740a2b4,
		0xa2575868, 0x682683c1, 0xdbb30fac, 0x61fe1928, 0x468a6511, 0xc61cd5f4, 0xe54d9800, 0x6b98d7f7,
		0x8418b6a5, 0x5f09a5d2, 0x90b4e80b, 0x49b2c852, 0x69f11c77, 0x17412b7e, 0x7f6fc0ed, 0x56838dcc,
		0x6e9546a2, 0xd0758619, 0x087b9b9a, 0xd231a01d, 0xaf46d415, 0x097060fd, 0xd920f657, 0x882d3f9f,
		0x3ae7c3c9, 0xe8a00d9b, 0x4fe67ebe, 0x2ef80eb2, 0xc1916b0c, 0xf4dffea0, 0xb97eb3eb, 0xfdff84dd,
		0xff8b14f1, 0xe96b0572, 0xf64b508c, 0xae220a6e, 0x4423ae5a, 0xc2bece5e, 0xde27567c, 0xfc935c63,
		0x47075573, 0xe65b27f0, 0xe121fd22, 0xf2668753, 0x2debf5d7, 0x8347e08d, 0xac5eda03, 0x2a7cebe9,
		0x3fe8d92e, 0x23542fe4, 0x1fa7bd50, 0xcf9b4102, 0x9d0dba39, 0x9cb8902a, 0xa7249d8b, 0x0f6d667a,
		0x5ebfa9ec, 0x6a594df2, 0x79600938, 0x023b7591, 0xea2c79c8, 0xc99d07ea, 0x64cb5ee1, 0x1a9cab3d,
		0x76db9527, 0xc08e012f, 0x3dfb481a, 0x872f22e7, 0x2948d15c, 0xa4782c79, 0x6f50d232, 0x78f0728a,
		0x5a87aab1, 0xc4e2c19c, 0xee767387, 0x1b2a1864, 0x7b8d10d3, 0xd1713161, 0x0eeac456, 0xd8799e06,
		0xb645b548, 0x4043cb65, 0xa874fb29, 0x4b12d030, 0x7d687413, 0x18ef9a1f, 0xd7631d4c, 0x5829c7da,
		0xcdfa30fa, 0xc5084bb0, 0x92cd20e2, 0xd4c16940, 0x03283ec0, 0xa917813f, 0x9a587d01, 0x70041f8f,
		0xdc6ab1dc, 0xddaee3d5, 0x31829742, 0x198c022d, 0x1c9eafcb, 0x5bbc6c49, 0xd3d3293a, 0x16d50007,
		0x04bb8820, 0x3c5c2a41, 0x37ee7af8, 0x8eb04025, 0x9313ecba, 0xbffc4799, 0x8955a744, 0xef85d633,
		0x504499a7, 0xa6ca6a86, 0xbb3d3297, 0xb34a8236, 0x6dccbe4f, 0x06143394, 0xce19fc7b, 0xccc3c6c6,
		0xe36254ae, 0x77b7eda1, 0xa133dd9e, 0xebf9356a, 0x513ccf88, 0xe2a1b417, 0x972ee5bd, 0x853824cd,
		0x5752f4ee, 0x6c1142e8, 0x3ea4f309, 0xb2b5934a, 0xdfd628aa, 0x59acea3e, 0xa01eb92c, 0x389964bc,
		0xda305dd4, 0x019a59b7, 0x11d2ca93, 0xfaa6d3b9, 0x4e772eca, 0x72651776, 0xfb4e5b0e, 0xa38f91a8,
		0x1d0663b5, 0x30f4f192, 0xb50051b6, 0xb716ccb3, 0x4abd1b59, 0x146c5f26, 0xf134e2de, 0x00f67c6c,
		0xb0e1b795, 0x98aa4ec7, 0x0cc73b34, 0x654276a3, 0x8d1ba871, 0x740a5216, 0xe0d01a23, 0x9ed161d6,
		0x9f36a324, 0x993ebb7f, 0xfeb9491b, 0x365ddcdb, 0x810cffc5, 0x71ec0382, 0x2249e7bf, 0x48817046,
		0xf3a24a5b, 0x4288e4d9, 0x0bf5c243, 0x257fe151, 0x95b64c0d, 0x4164f066, 0xaaf7db08, 0x73b1119d,
		0x8f9f7bb8, 0xd6844596, 0xf07a34a6, 0x53943d0a, 0xf9dd166d, 0x7a8957af, 0xf8ba3ce5, 0x27c9621e,
		0x5cdae910, 0xc8518998, 0x941538fe, 0x136115d8, 0xaba8443c, 0x4d01f931, 0x34edf760, 0xb45f266b,
		0xd5d4de14, 0x52d8ac35, 0x15cfd885, 0xcbc5cd21, 0x4cd76d4d, 0x7c80ef54, 0xbc92ee75, 0x1e56a1f6,
	],
	[
		0xbaa20b6c, 0x9ffbad26, 0xe1f7d738, 0x794aec8d, 0xc9e9cf3c, 0x8a9a7846, 0xc57c4685, 0xb9a92fed,
		0x29cb141f, 0x52f9ddb7, 0xf68ba6bc, 0x19ccc020, 0x4f584aaa, 0x3bf6a596, 0x003b7cf7, 0x54f0ce9a,
		0xa7ec4303, 0x46cf0077, 0x78d33aa1, 0x215247d9, 0x74bcdf91, 0x08381d30, 0xdac43e40, 0x64872531,
		0x0beffe5f, 0xb317f457, 0xaebb12da, 0xd5d0d67b, 0x7d75c6b4, 0x42a6d241, 0x1502d0a9, 0x3fd97fff,
		0xc6c3ed28, 0x81868d0a, 0x92628bc5, 0x86679544, 0xfd1867af, 0x5ca3ea61, 0x568d5578, 0x4a2d71f4,
		0x43c9d549, 0x8d95de2b, 0x6e5c74a0, 0x9120ffc7, 0x0d05d14a, 0xa93049d3, 0xbfa80e17, 0xf4096810,
		0x043f5ef5, 0xa673b4f1, 0x6d780298, 0xa4847783, 0x5ee726fb, 0x9934c281, 0x220a588c, 0x384e240f,
		0x933d5c69, 0x39e5ef47, 0x26e8b8f3, 0x4c1c6212, 0x8040f75d, 0x074b7093, 0x6625a8d7, 0x36298945,
		0x76285088, 0x651d37c3, 0x24f5274d, 0xdbca3dab, 0x186b7ee1, 0xd80f8182, 0x14210c89, 0x943a3075,
		0x4e6e11c4, 0x4d7e6bad, 0xf05064c8, 0x025dcd97, 0x4bc10302, 0x7cede572, 0x8f90a970, 0xab88eeba,
		0xb5998029, 0x5124d839, 0xb0eeb6a3, 0x89ddabdc, 0xe8074d76, 0xa1465223, 0x32518cf2, 0x9d39d4eb,
		0xc0d84524, 0xe35e6ea8, 0x7abf3804, 0x113e2348, 0x9ae6069d, 0xb4dfdabb, 0xa8c5313f, 0x23ea3f79,
		0x530e36a2, 0xa5fd228b, 0x95d1d350, 0x2b14cc09, 0x40042956, 0x879d05cc, 0x2064b9ca, 0xacaca40e,
		0xb29c846e, 0x9676c9e3, 0x752b7b8a, 0x7be2bcc2, 0x6bd58f5e, 0xd48f4c32, 0x606835e4, 0x9cd7c364,
		0x2c269b7a, 0x3a0d079c, 0x73b683fe, 0x45374f1e, 0x10afa242, 0x577f8666, 0xddaa10f6, 0xf34f561c,
		0x3d355d6b, 0xe47048ae, 0xaa13c492, 0x050344fd, 0x2aab5151, 0xf5b26ae5, 0xed919a59, 0x5ac67900,
		0xf1cde380, 0x0c79a11b, 0x351533fc, 0xcd4d8e36, 0x1f856005, 0x690b9fdd, 0xe736dccf, 0x1d47bf6a,
		0x7f66c72a, 0x85f21b7f, 0x983cbdb6, 0x01ebbebf, 0x035f3b99, 0xeb111f34, 0x28cefdc6, 0x5bfc9ecd,
		0xf22eacb0, 0x9e41cbb2, 0xe0f8327c, 0x82e3e26f, 0xfc43fc86, 0xd0ba66df, 0x489ef2a7, 0xd9e0c81d,
		0x68690d52, 0xcc451367, 0xc2232e16, 0xe95a7335, 0x0fdae19b, 0xff5b962c, 0x97596527, 0xc46db333,
		0x3ed4c562, 0xc14c9d9e, 0x5d6faa21, 0x638e940d, 0xf9316d58, 0x47b3b0ea, 0x30ffcad2, 0xce1bba7d,
		0x1e6108e6, 0x2e1ea33d, 0x507bf05b, 0xfafef94b, 0xd17de8e2, 0x5598b214, 0x1663f813, 0x17d25a2d,
		0xeefa5ff9, 0x582f4e37, 0x12128773, 0xfef17ab8, 0x06005322, 0xbb32bbc9, 0x8c898508, 0x592c15f0,
		0xd38a4054, 0x4957b7d6, 0xd2b891db, 0x37bd2d3e, 0x34ad20cb, 0x622288e9, 0x2dc7345a, 0xafb416c0,
		0x1cf459b1, 0xdc7739fa, 0x0a711a25, 0x13e18a0c, 0x5f72af4c, 0x6ac8db11, 0xbe53c18e, 0x1aa569b9,
		0xef551ea4, 0xa02a429f, 0xbd16e790, 0x7eb9171a, 0x77d693d8, 0x8e06993a, 0x9bde7560, 0xe5801987,
		0xc37a09be, 0xb8db76ac, 0xe2087294, 0x6c81616d, 0xb7f30fe7, 0xbc9b82bd, 0xfba4e4d4, 0xc7b1012f,
		0xa20c043b, 0xde9febd0, 0x2f9297ce, 0xe610aef8, 0x70b06f19, 0xc86ae00b, 0x0e01988f, 0x41192ae0,
		0x448c1cb5, 0xadbe92ee, 0x7293a007, 0x1b54b5b3, 0xd61f63d1, 0xeae40a74, 0x61a72b55, 0xec83a7d5,
		0x88942806, 0x90a07da5, 0xd7424b95, 0x67745b4e, 0xa31a1853, 0xca6021ef, 0xdfb56c4f, 0xcbc2d915,
		0x3c48e918, 0x8bae3c63, 0x6f659c71, 0xf8b754c1, 0x2782f3de, 0xf796f168, 0x71492c84, 0x33c0f5a6,
		0x3144f6ec, 0x25dc412e, 0xb16c5743, 0x83a1fa7e, 0x0997b101, 0xb627e6e8, 0xcf33905c, 0x8456fb65,
		0xb29bea74, 0xc35da605, 0x305c1ca3, 0xd2e9f5bc, 0x6fd5bff4, 0xff347703, 0xfc45b163, 0xf498e068,
		0xb71229fc, 0x81acc3fb, 0x78538a8b, 0x984ecf81, 0xa5da47a4, 0x8f259eef, 0x6475dc65, 0x081865b9,
		0x49e14a3c, 0x19e66079, 0xd382e91b, 0x5b109794, 0x3f9f81e1, 0x4470a388, 0x41601abe, 0xaaf9f407,
		0x8e175ef6, 0xed842297, 0x893a4271, 0x1790839a, 0xd566a99e, 0x6b417dee, 0x75c90d23, 0x715edb31,
		0x723553f7, 0x9afb50c9, 0xfbc5f600, 0xcd3b6a4e, 0x97ed0fba, 0x29689aec, 0x63135c8e, 0xf0e26c7e,
		0x0692ae7f, 0xdbb208ff, 0x2ede3e9b, 0x6a65bebd, 0xd40867e9, 0xc954afc5, 0x73b08201, 0x7ffdf809,
		0x1195c24f, 0x1ca5adca, 0x74bd6d1f, 0xb393c455, 0xcadfd3fa, 0x99f13011, 0x0ebca813, 0x60e791b8,
		0x6597ac7a, 0x18a7e46b, 0x09cb49d3, 0x0b27df6d, 0xcfe52f87, 0xcef66837, 0xe6328035, 0xfa87c592,
		0x37baff93, 0xd71fcc99, 0xdcab205c, 0x4d7a5638, 0x48012510, 0x62797558, 0xb6cf1fe5, 0xbc311834,
		0x9c2373ac, 0x14ec6175, 0xa439cbdf, 0x54afb0ea, 0xd686960b, 0xfdd0d47b, 0x7b063902, 0x8b78bac3,
		0x26c6a4d5, 0x5c0055b6, 0x2376102e, 0x0411783e, 0x2aa3f1cd, 0x51fc6ea8, 0x701ce243, 0x9b2a0abb,
		0x0ad93733, 0x6e80d03d, 0xaf6295d1, 0xf629896f, 0xa30b0648, 0x463d8dd4, 0x963f84cb, 0x01ff94f8,
		0x8d7fefdc, 0x553611c0, 0xa97c1719, 0xb96af759, 0xe0e3c95e, 0x0528335b, 0x21fe5925, 0x821a5245,
		0x807238b1, 0x67f23db5, 0xea6b4eab, 0x0da6f985, 0xab1bc85a, 0xef8c90e4, 0x4526230e, 0x38eb8b1c,
		0x1b91cd91, 0x9fce5f0c, 0xf72cc72b, 0xc64f2617, 0xdaf7857d, 0x7d373cf1, 0x28eaedd7, 0x203887d0,
		0xc49a155f, 0xa251b3b0, 0xf2d47ae3, 0x3d9ef267, 0x4a94ab2f, 0x7755a222, 0x0205e329, 0xc28fa7a7,
		0xaec1fe51, 0x270f164c, 0x8c6d01bf, 0x53b5bc98, 0xc09d3feb, 0x834986cc, 0x4309a12c, 0x578b2a96,
		0x3bb74b86, 0x69561b4a, 0x037e32f3, 0xde335b08, 0xc5156be0, 0xe7ef09ad, 0x93b834c7, 0xa7719352,
		0x59302821, 0xe3529d26, 0xf961da76, 0xcb142c44, 0xa0f3b98d, 0x76502457, 0x945a414b, 0x078eeb12,
		0xdff8de69, 0xeb6c8c2d, 0xbda90c4d, 0xe9c44d16, 0x168dfd66, 0xad64763b, 0xa65fd764, 0x95a29c06,
		0x32d7713f, 0x40f0b277, 0x224af08f, 0x004cb5e8, 0x92574814, 0x8877d827, 0x3e5b2d04, 0x68c2d5f2,
		0x86966273, 0x1d433ada, 0x8774988a, 0x3c0e0bfe, 0xddad581d, 0x2fd654ed, 0x0f4769fd, 0xc181ee9d,
		0x5fd88f61, 0x341dbb3a, 0x528543f9, 0xd92235cf, 0x1ea82eb4, 0xb5cd790f, 0x91d24f1e, 0xa869e6c2,
		0x61f474d2, 0xcc205add, 0x0c7bfba9, 0xbf2b0489, 0xb02d72d8, 0x2b46ece6, 0xe4dcd90a, 0xb8a11440,
		0xee8a63b7, 0x854dd1a1, 0xd1e00583, 0x42b40e24, 0x9e8964de, 0xb4b35d78, 0xbec76f6e, 0x24b9c620,
		0xd8d399a6, 0x5adb2190, 0x2db12730, 0x3a5866af, 0x58c8fadb, 0x5d8844e7, 0x8a4bf380, 0x15a01d70,
		0x79f5c028, 0x66be3b8c, 0xf3e42b53, 0x56990039, 0x2c0c3182, 0x5e16407c, 0xecc04515, 0x6c440284,
		0x4cb6701a, 0x13bfc142, 0x9d039f6a, 0x4f6e92c8, 0xa1407c62, 0x8483a095, 0xc70ae1c4, 0xe20213a2,
		0xbacafc41, 0x4ecc12b3, 0x4bee3646, 0x1fe807ae, 0x25217f9c, 0x35dde5f5, 0x7a7dd6ce, 0xf89cce50,
		0xac07b718, 0x7e73d2c6, 0xe563e76c, 0x123ca536, 0x3948ca56, 0x9019dd49, 0x10aa88d9, 0xc82451e2,
		0x473eb6d6, 0x506fe854, 0xe8bb03a5, 0x332f4c32, 0xfe1e1e72, 0xb1ae572a, 0x7c0d7bc1, 0xe1c37eb2,
		0xf542aa60, 0xf1a48ea0, 0xd067b89f, 0xbbfa195d, 0x1a049b0d, 0x315946aa, 0x36d1b447, 0x6d2ebdf0,
	],
	[
		0x0d188a6d, 0x12cea0db, 0x7e63740e, 0x6a444821, 0x253d234f, 0x6ffc6597, 0x94a6bdef, 0x33ee1b2f,
		0x0a6c00c0, 0x3aa336b1, 0x5af55d17, 0x265fb3dc, 0x0e89cf4d, 0x0786b008, 0xc80055b8, 0x6b17c3ce,
		0x72b05a74, 0xd21a8d78, 0xa6b70840, 0xfe8eae77, 0xed69565c, 0x55e1bcf4, 0x585c2f60, 0xe06f1a62,
		0xad67c0cd, 0x7712af88, 0x9cc26aca, 0x1888053d, 0x37eb853e, 0x9215abd7, 0xde30adfc, 0x1f1038e6,
		0x70c51c8a, 0x8d586c26, 0xf72bdd90, 0x4dc3ce15, 0x68eaeefa, 0xd0e9c8b9, 0x200f9c44, 0xddd141ba,
		0x024bf1d3, 0x0f64c9d4, 0xc421e9e9, 0x9d11c14c, 0x9a0dd9e4, 0x5f92ec19, 0x1b980df0, 0x1dcc4542,
		0xb8fe8c56, 0x0c9c9167, 0x4e81eb49, 0xca368f27, 0xe3603b37, 0xea08accc, 0xac516992, 0xc34f513b,
		0x804d100d, 0x6edca4c4, 0xfc912939, 0x29d219b0, 0x278aaa3c, 0x4868da7d, 0x54e890b7, 0xb46d735a,
		0x514589aa, 0xd6c630af, 0x4980dfe8, 0xbe3ccc55, 0x59d41202, 0x650c078b, 0xaf3a9e7b, 0x3ed9827a,
		0x9e79fc6e, 0xaadbfbae, 0xc5f7d803, 0x3daf7f50, 0x67b4f465, 0x73406e11, 0x39313f8c, 0x8a6e6686,
		0xd8075f1f, 0xd3cbfed1, 0x69c7e49c, 0x930581e0, 0xe4b1a5a8, 0xbbc45472, 0x09ddbf58, 0xc91d687e,
		0xbdbffda5, 0x88c08735, 0xe9e36bf9, 0xdb5ea9b6, 0x95559404, 0x08f432fb, 0xe24ea281, 0x64663579,
		0x000b8010, 0x7914e7d5, 0x32fd0473, 0xd1a7f0a4, 0x445ab98e, 0xec72993f, 0xa29a4d32, 0xb77306d8,
		0xc7c97cf6, 0x7b6ab645, 0xf5ef7adf, 0xfb2e15f7, 0xe747f757, 0x5e944354, 0x234a2669, 0x47e46359,
		0x9b9d11a9, 0x40762ced, 0x56f1de98, 0x11334668, 0x890a9a70, 0x1a296113, 0xb3bd4af5, 0x163b7548,
		0xd51b4f84, 0xb99b2abc, 0x3cc1dc30, 0xa9f0b56c, 0x812272b2, 0x0b233a5f, 0xb650dbf2, 0xf1a0771b,
		0x36562b76, 0xdc037b0f, 0x104c97ff, 0xc2ec98d2, 0x90596f22, 0x28b6620b, 0xdf42b212, 0xfdbc4243,
		0xf3fb175e, 0x4a2d8b00, 0xe8f3869b, 0x30d69bc3, 0x853714c8, 0xa7751d2e, 0x31e56dea, 0xd4840b0c,
		0x9685d783, 0x068c9333, 0x8fba032c, 0x76d7bb47, 0x6d0ee22b, 0xb546794b, 0xd971b894, 0x8b09d253,
		0xa0ad5761, 0xee77ba06, 0x46359f31, 0x577cc7ec, 0x52825efd, 0xa4beed95, 0x9825c52a, 0xeb48029a,
		0xbaae59f8, 0xcf490ee1, 0xbc990164, 0x8ca49dfe, 0x4f38a6e7, 0x2ba98389, 0x8228f538, 0x199f64ac,
		0x01a1cac5, 0xa8b51641, 0x5ce72d01, 0x8e5df26b, 0x60f28e1e, 0xcd5be125, 0xe5b376bf, 0x1c8d3116,
		0x7132cbb3, 0xcb7ae320, 0xc0fa5366, 0xd7653e34, 0x971c88c2, 0xc62c7dd0, 0x34d0a3da, 0x868f6709,
		0x7ae6fa8f, 0x22bbd523, 0x66cd3d5b, 0x1ef9288d, 0xf9cf58c1, 0x5b784e80, 0x7439a191, 0xae134c36,
		0x9116c463, 0x2e9e1396, 0xf8611f3a, 0x2d2f3307, 0x247f37dd, 0xc1e2ff9d, 0x43c821e5, 0x05ed5cab,
		0xef74e80a, 0x4cca6028, 0xf0ac3cbd, 0x5d874b29, 0x6c62f6a6, 0x4b2a2ef3, 0xb1aa2087, 0x62a5d0a3,
		0x0327221c, 0xb096b4c6, 0x417ec693, 0xaba840d6, 0x789725eb, 0xf4b9e02d, 0xe6e00975, 0xcc04961a,
		0x63f624bb, 0x7fa21ecb, 0x2c01ea7f, 0xb2415005, 0x2a8bbeb5, 0x83b2b14e, 0xa383d1a7, 0x5352f96a,
		0x043ecdad, 0xce1918a1, 0xfa6be6c9, 0x50def36f, 0xf6b80ce2, 0x4543ef7c, 0x9953d651, 0xf257955d,
		0x87244914, 0xda1e0a24, 0xffda4785, 0x14d327a2, 0x3b93c29f, 0x840684b4, 0x61ab71a0, 0x9f7b784a,
		0x2fd570cf, 0x15955bde, 0x38f8d471, 0x3534a718, 0x133fb71d, 0x3fd80f52, 0x4290a8be, 0x75ff44c7,
		0xa554e546, 0xe1023499, 0xbf2652e3, 0x7d20399e, 0xa1df7e82, 0x177092ee, 0x217dd3f1, 0x7c1ff8d9,
		0x12113f2e, 0xbfbd0785, 0xf11793fb, 0xa5bff566, 0x83c7b0e5, 0x72fb316b, 0x75526a9a, 0x41e0e612,
		0x7156ba09, 0x53ce7dee, 0x0aa26881, 0xa43e0d7d, 0x3da73ca3, 0x182761ed, 0xbd5077ff, 0x56db4aa0,
		0xe792711c, 0xf0a4eb1d, 0x7f878237, 0xec65c4e8, 0x08dc8d43, 0x0f8ce142, 0x8258abda, 0xf4154e16,
		0x49dec2fd, 0xcd8d5705, 0x6c2c3a0f, 0x5c12bb88, 0xeff3cdb6, 0x2c89ed8c, 0x7beba967, 0x2a142157,
		0xc6d0836f, 0xb4f97e96, 0x6931e969, 0x514e6c7c, 0xa7792600, 0x0bbbf780, 0x59671bbd, 0x0707b676,
		0x37482d93, 0x80af1479, 0x3805a60d, 0xe1f4cac1, 0x580b3074, 0x30b8d6ce, 0x05a304be, 0xd176626d,
		0xebca97f3, 0xbb201f11, 0x6a1afe23, 0xffaa86e4, 0x62b4da49, 0x1b6629f5, 0xf5d9e092, 0xf37f3dd1,
		0x619bd45b, 0xa6ec8e4f, 0x29c80939, 0x0c7c0c34, 0x9cfe6e48, 0xe65fd3ac, 0x73613b65, 0xb3c669f9,
		0xbe2e8a9e, 0x286f9678, 0x5797fd13, 0x99805d75, 0xcfb641c5, 0xa91074ba, 0x6343af47, 0x6403cb46,
		0x8894c8db, 0x2663034c, 0x3c40dc5e, 0x00995231, 0x96789aa2, 0x2efde4b9, 0x7dc195e1, 0x547dadd5,
		0x06a8ea04, 0xf2347a63, 0x5e0dc6f7, 0x8462dfc2, 0x1e6b2c3c, 0x9bd275b3, 0x91d419e2, 0xbcefd17e,
		0xb9003924, 0xd07e7320, 0xdef0495c, 0xc36ad00e, 0x1785b1ab, 0x92e20bcf, 0xb139f0e9, 0x675bb9a1,
		0xaecfa4af, 0x132376cb, 0xe84589d3, 0x79a05456, 0xa2f860bc, 0x1ae4f8b5, 0x20df4db4, 0xa1e1428b,
		0x3bf60a1a, 0x27ff7bf1, 0xcb44c0e7, 0xf7f587c4, 0x1f3b9b21, 0x94368f01, 0x856e23a4, 0x6f93de3f,
		0x773f5bbf, 0x8b22056e, 0xdf41f654, 0xb8246ff4, 0x8d57bff2, 0xd57167ea, 0xc5699f22, 0x40734ba7,
		0x5d5c2772, 0x033020a8, 0xe30a7c4d, 0xadc40fd6, 0x76353441, 0x5aa5229b, 0x81516590, 0xda49f14e,
		0x4fa672a5, 0x4d9fac5f, 0x154be230, 0x8a7a5cc0, 0xce3d2f84, 0xcca15514, 0x5221360c, 0xaf0fb81e,
		0x5bdd5873, 0xf6825f8f, 0x1113d228, 0x70ad996c, 0x93320051, 0x60471c53, 0xe9ba567b, 0x3a462ae3,
		0x5f55e72d, 0x1d3c5ad7, 0xdcfc45ec, 0x34d812ef, 0xfa96ee1b, 0x369d1ef8, 0xc9b1a189, 0x7c1d3555,
		0x50845edc, 0x4bb31877, 0x8764a060, 0x8c9a9415, 0x230e1a3a, 0xb05e9133, 0x242b9e03, 0xa3b99db7,
		0xc2d7fb0a, 0x3333849d, 0xd27278d4, 0xb5d3efa6, 0x78ac28ad, 0xc7b2c135, 0x0926ecf0, 0xc1374c91,
		0x74f16d98, 0x2274084a, 0x3f6d9cfa, 0x7ac0a383, 0xb73aff1f, 0x3909a23d, 0x9f1653ae, 0x4e2f3e71,
		0xca5ab22a, 0xe01e3858, 0x90c5a7eb, 0x3e4a17df, 0xaa987fb0, 0x488bbd62, 0xb625062b, 0x2d776bb8,
		0x43b5fc08, 0x1490d532, 0xd6d12495, 0x44e89845, 0x2fe60118, 0x9d9ef950, 0xac38133e, 0xd3864329,
		0x017b255a, 0xfdc2dd26, 0x256851e6, 0x318e7086, 0x2bfa4861, 0x89eac706, 0xee5940c6, 0x68c3bc2f,
		0xe260334b, 0x98da90bb, 0xf818f270, 0x4706d897, 0x212d3799, 0x4cf7e5d0, 0xd9c9649f, 0xa85db5cd,
		0x35e90e82, 0x6b881152, 0xab1c02c7, 0x46752b02, 0x664f598e, 0x45ab2e64, 0xc4cdb4b2, 0xba42107f,
		0xea2a808a, 0x971bf3de, 0x4a54a836, 0x4253aecc, 0x1029be68, 0x6dcc9225, 0xe4bca56a, 0xc0ae50b1,
		0x7e011d94, 0xe59c162c, 0xd8e5c340, 0xd470fa0b, 0xb2be79dd, 0xd783889c, 0x1cede8f6, 0x8f4c817a,
		0xddb785c9, 0x860232d8, 0x198aaad9, 0xa0814738, 0x3219cffc, 0x169546d2, 0xfc0cb759, 0x55911510,
		0x04d5cec3, 0xed08cc3b, 0x0d6cf427, 0xc8e38cca, 0x0eeee3fe, 0x9ee7d7c8, 0xf9f24fa9, 0xdb04b35d,
		0x9ab0c9e0, 0x651f4417, 0x028f8b07, 0x6e28d9aa, 0xfba96319, 0x8ed66687, 0xfecbc58d, 0x954ddb44,
	],
	[
		0x7b0bdffe, 0x865d16b1, 0x49a058c0, 0x97abaa3f, 0xcaacc75d, 0xaba6c17d, 0xf8746f92, 0x6f48aeed,
		0x8841d4b5, 0xf36a146a, 0x73c390ab, 0xe6fb558f, 0x87b1019e, 0x26970252, 0x246377b2, 0xcbf676ae,
		0xf923db06, 0xf7389116, 0x14c81a90, 0x83114eb4, 0x8b137559, 0x95a86a7a, 0xd5b8da8c, 0xc4df780e,
		0x5a9cb3e2, 0xe44d4062, 0xe8dc8ef6, 0x9d180845, 0x817ad18b, 0xc286c85b, 0x251f20de, 0xee6d5933,
		0xf6edef81, 0xd4d16c1e, 0xc94a0c32, 0x8437fd22, 0x3271ee43, 0x42572aee, 0x5f91962a, 0x1c522d98,
		0x59b23f0c, 0xd86b8804, 0x08c63531, 0x2c0d7a40, 0xb97c4729, 0x04964df9, 0x13c74a17, 0x5878362f,
		0x4c808cd6, 0x092cb1e0, 0x6df02885, 0xa0c2105e, 0x8aba9e68, 0x64e03057, 0xe5d61325, 0x0e43a628,
		0x16dbd62b, 0x2733d90b, 0x3ae57283, 0xc0c1052c, 0x4b6fb620, 0x37513953, 0xfc898bb3, 0x471b179f,
		0xdf6e66b8, 0xd32142f5, 0x9b30fafc, 0x4ed92549, 0x105c6d99, 0x4acd69ff, 0x2b1a27d3, 0x6bfcc067,
		0x6301a278, 0xad36e6f2, 0xef3ff64e, 0x56b3cadb, 0x0184bb61, 0x17beb9fd, 0xfaec6109, 0xa2e1ffa1,
		0x2fd224f8, 0x238f5be6, 0x8f8570cf, 0xaeb5f25a, 0x4f1d3e64, 0x4377eb24, 0x1fa45346, 0xb2056386,
		0x52095e76, 0xbb7b5adc, 0x3514e472, 0xdde81e6e, 0x7acea9c4, 0xac15cc48, 0x71c97d93, 0x767f941c,
		0x911052a2, 0xffea09bf, 0xfe3ddcf0, 0x15ebf3aa, 0x9235b8bc, 0x75408615, 0x9a723437, 0xe1a1bd38,
		0x33541b7e, 0x1bdd6856, 0xb307e13e, 0x90814bb0, 0x51d7217b, 0x0bb92219, 0x689f4500, 0xc568b01f,
		0x5df3d2d7, 0x3c0ecd0d, 0x2a0244c8, 0x852574e8, 0xe72f23a9, 0x8e26ed02, 0x2d92cbdd, 0xdabc0458,
		0xcdf5feb6, 0x9e4e8dcc, 0xf4f1e344, 0x0d8c436d, 0x4427603b, 0xbdd37fda, 0x80505f26, 0x8c7d2b8e,
		0xb73273c5, 0x397362ea, 0x618a3811, 0x608bfb88, 0x06f7d714, 0x212e4677, 0x28efcead, 0x076c0371,
		0x36a3a4d9, 0x5487b455, 0x3429a365, 0x65d467ac, 0x78ee7eeb, 0x99bf12b7, 0x4d129896, 0x772a5601,
		0xcce284c7, 0x2ed85c21, 0xd099e8a4, 0xa179158a, 0x6ac0ab1a, 0x299a4807, 0xbe67a58d, 0xdc19544a,
		0xb8949b54, 0x8d315779, 0xb6f849c1, 0x53c5ac34, 0x66de92a5, 0xf195dd13, 0x318d3a73, 0x301ec542,
		0x0cc40da6, 0xf253ade4, 0x467ee566, 0xea5585ec, 0x3baf19bb, 0x7de9f480, 0x79006e7c, 0xa9b7a197,
		0xa44bd8f1, 0xfb2ba739, 0xec342fd4, 0xed4fd32d, 0x3d1789ba, 0x400f5d7f, 0xc798f594, 0x4506a847,
		0x034c0a95, 0xe2162c9d, 0x55a9cfd0, 0x692d832e, 0xcf9db2ca, 0x5e2287e9, 0xd2610ef3, 0x1ae7ecc2,
		0x48399ca0, 0xa7e4269b, 0x6ee3a0af, 0x7065bfe1, 0xa6ffe708, 0x2256804c, 0x7476e21b, 0x41b0796c,
		0x7c243b05, 0x000a950f, 0x1858416b, 0xf5a53c89, 0xe9fef823, 0x3f443275, 0xe0cbf091, 0x0af27b84,
		0x3ebb0f27, 0x1de6f7f4, 0xc31c29f7, 0xb166de3d, 0x12932ec3, 0x9c0c0674, 0x5cda81b9, 0xd1bd9d12,
		0xaffd7c82, 0x8962bca7, 0xa342c4a8, 0x62457151, 0x82089f03, 0xeb49c670, 0x5b5f6530, 0x7e28bad2,
		0x20880ba3, 0xf0faafcd, 0xce82b56f, 0x0275335c, 0xc18e8afb, 0xde601d69, 0xba9b820a, 0xc8a2be4f,
		0xd7cac335, 0xd9a73741, 0x115e974d, 0x7f5ac21d, 0x383bf9c6, 0xbcaeb75f, 0xfd0350ce, 0xb5d06b87,
		0x9820e03c, 0x72d5f163, 0xe3644fc9, 0xa5464c4b, 0x57048fcb, 0x9690c9df, 0xdbf9eafa, 0xbff4649a,
		0x053c00e3, 0xb4b61136, 0x67593dd1, 0x503ee960, 0x9fb4993a, 0x19831810, 0xc670d518, 0xb05b51d8,
		0x0f3a1ce5, 0x6caa1f9c, 0xaacc31be, 0x949ed050, 0x1ead07e7, 0xa8479abd, 0xd6cffcd5, 0x936993ef,
		0x472e91cb, 0x5444b5b6, 0x62be5861, 0x1be102c7, 0x63e4b31e, 0xe81f71b7, 0x9e2317c9, 0x39a408ae,
		0x518024f4, 0x1731c66f, 0x68cbc918, 0x71fb0c9e, 0xd03b7fdd, 0x7d6222eb, 0x9057eda3, 0x1a34a407,
		0x8cc2253d, 0xb6f6979d, 0x835675dc, 0xf319be9f, 0xbe1cd743, 0x4d32fee4, 0x77e7d887, 0x37e9ebfd,
		0x15f851e8, 0x23dc3706, 0x19d78385, 0xbd506933, 0xa13ad4a6, 0x913f1a0e, 0xdde560b9, 0x9a5f0996,
		0xa65a0435, 0x48d34c4d, 0xe90839a7, 0x8abba54e, 0x6fd13ce1, 0xc7eebd3c, 0x0e297602, 0x58b9bbb4,
		0xef7901e6, 0x64a28a62, 0xa509875a, 0xf8834442, 0x2702c709, 0x07353f31, 0x3b39f665, 0xf5b18b49,
		0x4010ae37, 0x784de00b, 0x7a1121e9, 0xde918ed3, 0xc8529dcd, 0x816a5d05, 0x02ed8298, 0x04e3dd84,
		0xfd2bc3e2, 0xaf167089, 0x96af367e, 0xa4da6232, 0x18ff7325, 0x05f9a9f1, 0x4fefb9f9, 0xcd94eaa5,
		0xbfaa5069, 0xa0b8c077, 0x60d86f57, 0xfe71c813, 0x29ebd2c8, 0x4ca86538, 0x6bf1a030, 0xa237b88a,
		0xaa8af41d, 0xe1f7b6ec, 0xe214d953, 0x33057879, 0x49caa736, 0xfa45cff3, 0xc063b411, 0xba7e27d0,
		0x31533819, 0x2a004ac1, 0x210efc3f, 0x2646885e, 0x66727dcf, 0x9d7fbf54, 0xa8dd0ea8, 0x3447cace,
		0x3f0c14db, 0xb8382aac, 0x4ace3539, 0x0a518d51, 0x95178981, 0x35aee2ca, 0x73f0f7e3, 0x94281140,
		0x59d0e523, 0xd292cb88, 0x565d1b27, 0x7ec8fbaf, 0x069af08d, 0xc127fd24, 0x0bc77b10, 0x5f03e7ef,
		0x453e99ba, 0xeed9ff7f, 0x87b55215, 0x7915ab4c, 0xd389a358, 0x5e75ce6d, 0x28d655c0, 0xdad26c73,
		0x2e2510ff, 0x9fa7eecc, 0x1d0629c3, 0xdc9c9c46, 0x2d67ecd7, 0xe75e94bd, 0x3d649e2a, 0x6c413a2b,
		0x706f0d7c, 0xdfb0127b, 0x4e366b55, 0x2c825650, 0x24205720, 0xb5c998f7, 0x3e95462c, 0x756e5c72,
		0x3259488f, 0x11e8771a, 0xa7c0a617, 0x577663e5, 0x089b6401, 0x8eab1941, 0xae55ef8c, 0x3aac5460,
		0xd4e6262f, 0x5d979a47, 0xb19823b0, 0x7f8d6a0c, 0xffa08683, 0x0170cd0f, 0x858cd5d8, 0x53961c90,
		0xc4c61556, 0x41f2f226, 0xcfcd062d, 0xf24c03b8, 0xea81df5b, 0x7be2fa52, 0xb361f98b, 0xc2901316,
		0x55ba4bbc, 0x93b234a9, 0x0fbc6603, 0x80a96822, 0x6d60491f, 0x22bd00f8, 0xbcad5aad, 0x52f3f13b,
		0x42fd2b28, 0xb41dd01c, 0xc52c93bf, 0xfc663094, 0x8f58d100, 0x43fecc08, 0xc6331e5d, 0xe6480f66,
		0xca847204, 0x4bdf1da0, 0x30cc2efb, 0x13e02dea, 0xfb49ac45, 0xf9d4434f, 0xf47c5b9c, 0x148879c2,
		0x039fc234, 0xa3db9bfc, 0xd1a1dc5c, 0x763d7cd4, 0xed6d2f93, 0xab13af6e, 0x1e8e054a, 0xd68f4f9a,
		0xc30484b3, 0xd7d50afa, 0x6930855f, 0xcc07db95, 0xce746db1, 0x744e967d, 0xf16cf575, 0x8643e8b5,
		0xf0eae38e, 0xe52de1d1, 0x6587dae0, 0x0c4b8121, 0x1c7ac567, 0xac0db20a, 0x36c3a812, 0x5b1a4514,
		0xa9a3f868, 0xb9263baa, 0xcb3ce9d2, 0xe44fb1a4, 0x9221bc82, 0xb29390fe, 0x6ab41863, 0x974a3e2e,
		0x89f531c5, 0x255ca13e, 0x8b65d348, 0xec248f78, 0xd8fc16f0, 0x50ecdeee, 0x09010792, 0x3c7d1fb2,
		0xeba5426b, 0x847b417a, 0x468b40d9, 0x8dc4e680, 0x7cc1f391, 0x2f1eb086, 0x6e5baa6a, 0xe0b395da,
		0xe31b2cf6, 0xd9690b0d, 0x729ec464, 0x38403dde, 0x610b80a2, 0x5cf433ab, 0xb0785fc4, 0xd512e4c6,
		0xbbb7d699, 0x5a86591b, 0x10cf5376, 0x12bf9f4b, 0x980fbaa1, 0x992a4e70, 0x20fa7ae7, 0xf7996ebb,
		0xc918a2be, 0x82de74f2, 0xad54209b, 0xf66b4d74, 0x1fc5b771, 0x169d9229, 0x887761df, 0x00b667d5,
		0xdb425e59, 0xb72f2844, 0x9b0ac1f5, 0x9c737e3a, 0x2b85476c, 0x6722add6, 0x44a63297, 0x0d688ced,
	],
	[
		0xabc59484, 0x4107778a, 0x8ad94c6f, 0xfe83df90, 0x0f64053f, 0xd1292e9d, 0xc5744356, 0x8dd1abb4,
		0x4c4e7667, 0xfb4a7fc1, 0x74f402cb, 0x70f06afd, 0xa82286f2, 0x918dd076, 0x7a97c5ce, 0x48f7bde3,
		0x6a04d11d, 0xac243ef7, 0x33ac10ca, 0x2f7a341e, 0x5f75157a, 0xf4773381, 0x591c870e, 0x78df8cc8,
		0x22f3adb0, 0x251a5993, 0x09fbef66, 0x796942a8, 0x97541d2e, 0x2373daa9, 0x1bd2f142, 0xb57e8eb2,
		0xe1a5bfdb, 0x7d0efa92, 0xb3442c94, 0xd2cb6447, 0x386ac97e, 0x66d61805, 0xbdada15e, 0x11bc1aa7,
		0x14e9f6ea, 0xe533a0c0, 0xf935ee0a, 0x8fee8a04, 0x810d6d85, 0x7c68b6d6, 0x4edc9aa2, 0x956e897d,
		0xed87581a, 0x264be9d7, 0xff4ddb29, 0x823857c2, 0xe005a9a0, 0xf1cc2450, 0x6f9951e1, 0xaade2310,
		0xe70c75f5, 0x83e1a31f, 0x4f7dde8e, 0xf723b563, 0x368e0928, 0x86362b71, 0x21e8982d, 0xdfb3f92b,
		0x44676352, 0x99efba31, 0x2eab4e1c, 0xfc6ca5e7, 0x0ebe5d4e, 0xa0717d0c, 0xb64f8199, 0x946b31a1,
		0x5656cbc6, 0xcffec3ef, 0x622766c9, 0xfa211e35, 0x52f98b89, 0x6d01674b, 0x4978a802, 0xf651f701,
		0x15b0d43d, 0xd6ff4683, 0x3463855f, 0x672ba29c, 0xbc128312, 0x4626a70d, 0xc8927a5a, 0xb8481cf9,
		0x1c962262, 0xa21196ba, 0xbaba5ee9, 0x5bb162d0, 0x69943bd1, 0x0c47e35c, 0x8cc9619a, 0xe284d948,
		0x271bf264, 0xc27fb398, 0x4bc70897, 0x60cf202c, 0x7f42d6aa, 0xa5a13506, 0x5d3e8860, 0xcea63d3c,
		0x63bf0a8f, 0xf02e9efa, 0xb17b0674, 0xb072b1d3, 0x06e5723b, 0x3737e436, 0x24aa49c7, 0x0ded0d18,
		0xdb256b14, 0x58b27877, 0xecb49f54, 0x6c40256a, 0x6ea92ffb, 0x3906aa4c, 0xc9866fd5, 0x4549323e,
		0xa7b85fab, 0x1918cc27, 0x7308d7b5, 0x1e16c7ad, 0x71850b37, 0x3095fd78, 0xa63b70e6, 0xd880e2ae,
		0x3e282769, 0xa39ba6bc, 0x98700fa3, 0xf34c53e8, 0x288af426, 0xb99d930f, 0xf5b99df1, 0xe9d0c8cf,
		0x5ac8405d, 0x50e7217b, 0x511fbbbe, 0x2ca2e639, 0xc020301b, 0x356dbc00, 0x8e43ddb9, 0x4d327b4a,
		0xf20ff3ed, 0x1dbb29bd, 0x43d44779, 0xa1b68f70, 0x6114455b, 0xe63d280b, 0x6bf6ff65, 0x10fc39e5,
		0x3dae126e, 0xc1d7cf11, 0xcb60b795, 0x1789d5b3, 0x9bca36b7, 0x08306075, 0x84615608, 0x8b3a0186,
		0xe88fbecd, 0x7ba47c4d, 0x2de44dac, 0x653fe58d, 0xcca0b968, 0xd7fa0e72, 0x93901780, 0x1f2c26cc,
		0xae595b6b, 0xa9ecea9b, 0xe3dbf8c4, 0x319cc130, 0x12981196, 0x01a3a4de, 0x32c454b6, 0x755bd817,
		0x3cd871e4, 0xa48bb8da, 0x02fdec09, 0xfd2dc2e2, 0x9e578088, 0x9a9f916d, 0x4065fe6c, 0x1853999e,
		0xc7793f23, 0xdc1016bb, 0x969355ff, 0x7ef292f6, 0xcdce4adc, 0x05e24416, 0x85c16c46, 0xd441d37f,
		0x57bd6855, 0x8746f54f, 0x9ca773df, 0x770bae22, 0x54828413, 0xb75e4b19, 0x04c35c03, 0xbf7cca07,
		0x2955c4dd, 0x721db041, 0xb2394f33, 0x03f51387, 0x89b73c9f, 0x0b1737f3, 0x07e69024, 0x9231d245,
		0x76193861, 0x88159c15, 0xdeb552d9, 0xd9767e40, 0x20c6c0c3, 0x4281977c, 0xf8afe1e0, 0xd32a0751,
		0x3fc27432, 0xddf1dcc5, 0x68581f34, 0x3bcd5025, 0x0091b2ee, 0x4aeb6944, 0x1602e743, 0xea09eb58,
		0xef0a2a8b, 0x641e03a5, 0xeb50e021, 0x5c8ccef8, 0x802ff0b8, 0xd5e3edfe, 0xc4dd1b49, 0x5334cd2a,
		0x13f82d2f, 0x47450c20, 0x55dafbd2, 0xbec0c6f4, 0xb45d7959, 0x3ad36e8c, 0x0aa8ac57, 0x1a3c8d73,
		0xe45aafb1, 0x9f664838, 0xc6880053, 0xd0039bbf, 0xee5f19eb, 0xca0041d8, 0xbbea3aaf, 0xda628291,
		0x9d5c95d4, 0xadd504a6, 0xc39ab482, 0x5e9e14a4, 0x2be065f0, 0x2a13fc3a, 0x9052e8ec, 0xaf6f5afc,
		0x519aa8b5, 0xbb303da9, 0xe00e2b10, 0xdfa6c1db, 0x2e6b952e, 0xee10dc23, 0x37936d09, 0x1fc42e92,
		0x39b25a9f, 0x13ff89f4, 0xc8f53fea, 0x18500bc7, 0x95a0379d, 0x98f751c2, 0x2289c42f, 0xa21e4098,
		0x6f391f41, 0xf27e7e58, 0x0d0df887, 0x4b79d540, 0x8e8409aa, 0x71fe46f8, 0x688a9b29, 0x3f08b548,
		0x84abe03a, 0x5e91b6c1, 0xfde4c2ae, 0x251d0e72, 0x92d4fee5, 0xf9371967, 0x9175108f, 0xe6e81835,
		0x8c8cb8ee, 0xb55a67b3, 0xcef138cc, 0x8b256268, 0x00d815f5, 0xe8810812, 0x77826189, 0xea73267d,
		0x19b90f8d, 0x45c33bb4, 0x82477056, 0xe1770075, 0x09467aa6, 0xa7c6f54a, 0x79768742, 0x61b86bca,
		0xd6644a44, 0xe33f0171, 0xc229fbcd, 0x41b08feb, 0xd1903e30, 0x65ec9080, 0x563d6fbd, 0xf56da488,
		0xebf64cd8, 0x4934426b, 0x7c8592fc, 0x6aca8cf2, 0x1cea111b, 0x3a57ee7a, 0xace11c0d, 0x9942d85e,
		0xc4613407, 0xfa8e643b, 0x327fc701, 0x4ca9be82, 0x3352526d, 0x2c047f63, 0xf3a8f7dd, 0x1a4a98a8,
		0x762ed4d1, 0x27c75008, 0xbdf497c0, 0x7a7b84df, 0x315c28ab, 0x801f93e3, 0xf19b0ca1, 0x8f14e46a,
		0xe48ba333, 0x9605e625, 0xf03ecb60, 0x60385f2d, 0x902845ba, 0x7f96d66f, 0x24bff05c, 0x2820730b,
		0x947133cb, 0xd444828a, 0xb343f6f1, 0x0bef4705, 0x8da574f9, 0x01e25d6c, 0x1732793e, 0x4f0f7b27,
		0x364b7117, 0xb2d1da77, 0xa6c5f1e9, 0x574ca5b1, 0x386a3076, 0xad6894d6, 0x1156d7fa, 0xa48d1d9a,
		0x4794c0af, 0x150c0aa0, 0x26d348ac, 0x29fdeabe, 0xa5dede53, 0x81671e8e, 0x594ee3bf, 0xa96c56e6,
		0x3426a726, 0xc5976579, 0xbc22e5e4, 0xc1006319, 0xdaafdd2a, 0xa1a1aa83, 0x3badd0e7, 0xc3b14981,
		0xd770b155, 0xccd7c693, 0x42e944c5, 0x03e0064f, 0xca95b4ef, 0x3dee81c3, 0xfbbcd98c, 0x1e07e15b,
		0x667ce949, 0xe7d6773f, 0x21b6124b, 0x6b2a6ef7, 0xd3278a9c, 0x9a988304, 0x75d2ae9b, 0xfe49e2ff,
		0x9bc24f46, 0x74cc2cf6, 0xa3139f36, 0x6c9ef35a, 0x9fc1dffe, 0x9e5facdc, 0xaadc8bbb, 0x5abdbc5f,
		0x44b3b390, 0xf754efa7, 0x5fe3bdb7, 0x4e59c886, 0x06a4c984, 0xa0338878, 0xcd513cd7, 0x63ebd27e,
		0x8aba80ad, 0x50da144e, 0x5d9f4e97, 0x025b751c, 0x2d580200, 0xb6c05837, 0x580aa15d, 0x54022a6e,
		0xb41a5415, 0x4863fab6, 0xb0b79957, 0x46d0d159, 0xdc2b8650, 0x20a7bb0c, 0x4a032974, 0xec8636a2,
		0x8548f24c, 0xf6a2bf16, 0x1088f4b0, 0x0c2f3a94, 0x525dc396, 0x14065785, 0x2b4dca52, 0x08aeed39,
		0xabedfc99, 0xb1dbcf18, 0x87f85bbc, 0xae3aff61, 0x433ccd70, 0x5b23cc64, 0x7b453213, 0x5355c545,
		0x9318ec0a, 0x78692d31, 0x0a21693d, 0xd5666814, 0x05fb59d9, 0xc71985b2, 0x2abb8e0e, 0xcf6e6c91,
		0xd9cfe7c6, 0xefe7132c, 0x9711ab28, 0x3ce52732, 0x12d516d2, 0x7209a0d0, 0xd278d306, 0x70fa4b7b,
		0x1d407dd3, 0xdb0beba4, 0xbfd97621, 0xa8be21e1, 0x1b6f1b66, 0x30650dda, 0xba7ddbb9, 0x7df953fb,
		0x9d1c3902, 0xedf0e8d5, 0xb8741ae0, 0x0f240565, 0x62cd438b, 0xc616a924, 0xaf7a96a3, 0x35365538,
		0xe583af4d, 0x73415eb8, 0x23176a47, 0xfc9ccee8, 0x7efc9de2, 0x695e03cf, 0xf8ce66d4, 0x88b4781d,
		0x67dd9c03, 0x3e8f9e73, 0xc0c95c51, 0xbe314d22, 0x55aa0795, 0xcb1bb011, 0xe980fdc8, 0x9c62b7ce,
		0xde2d239e, 0x042cadf3, 0xffdf04de, 0x5ce6a60f, 0xd8c831ed, 0xb7b5b9ec, 0xb9cbf962, 0xe253b254,
		0x0735ba1f, 0x16ac917f, 0xdd607c2b, 0x64a335c4, 0x40159a7c, 0x869222f0, 0x6ef21769, 0x839d20a5,
		0xd03b24c9, 0xf412601e, 0x6d72a243, 0x0e018dfd, 0x89f3721a, 0xc94f4134, 0x2f992f20, 0x4d87253c,
	],
];
