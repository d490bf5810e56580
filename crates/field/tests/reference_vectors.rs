// Copyright 2025 Irreducible Inc.

//! Known-answer multiplication vectors and inversion round trips for every field width.
//!
//! Multi-limb operands are written most significant limb first.

use std::collections::HashSet;

use gf2n_field::{
	Field, Gf32, Gf64, Gf128, Gf128Modulus, Gf192, Gf192Modulus, Gf256, Gf256Modulus, GfElement,
	Modulus,
};

const GF32_VECTORS: [(u32, u32, u32); 10] = [
	(0xec71_187b, 0x3c2b_4dc6, 0x18a7_92bd),
	(0xe241_86cd, 0xc7b1_3dc2, 0x5d88_22c4),
	(0x0c05_3421, 0xe357_be15, 0x9692_f4d2),
	(0xd0d4_2130, 0x3e59_7e24, 0xc7ea_9d01),
	(0x394b_1a86, 0x3674_def5, 0xafa1_ca21),
	(0xaf99_95cb, 0x4c12_835b, 0x795b_61fe),
	(0x494c_ccf7, 0x47d5_8182, 0xab95_d1be),
	(0x00f6_c1e7, 0x1dc6_cb1e, 0x2d4b_d0c9),
	(0x81fe_4a5f, 0xc975_aa50, 0x6f64_a32e),
	(0x6903_f854, 0x701e_ca01, 0xee87_35bb),
];

const GF64_VECTORS: [(u64, u64, u64); 10] = [
	(0x4c12_835b_af99_95cb, 0x47d5_8182_494c_ccf7, 0xcd8d_8859_4871_7796),
	(0x1dc6_cb1e_00f6_c1e7, 0xc975_aa50_81fe_4a5f, 0x68a1_2cd6_9de5_ba13),
	(0x701e_ca01_6903_f854, 0x1bff_27de_896d_5a63, 0x3f2b_0392_0fe6_f850),
	(0x8494_9f71_b013_dafd, 0xc864_2090_f949_02a6, 0x0260_be4b_6384_67b4),
	(0x4154_05db_8945_dfb1, 0xe45f_3b3b_4faf_bbfd, 0xeedd_9f3f_9a79_0308),
	(0x4556_f8aa_c66f_427f, 0xb1d2_219b_0266_de02, 0xbdfd_1cb2_a183_fd56),
	(0x3ddd_bcee_3039_f5fc, 0xfc9d_e0af_7ec4_0b3f, 0xab78_b6d4_59d0_d7a9),
	(0xc63a_3ae2_7b18_6b00, 0x7218_e0e2_8cba_2bad, 0x7cc1_1d40_edaf_1d46),
	(0xbfe1_ca4a_7ccb_135f, 0x6cbf_9a22_2a7f_80a7, 0x6afb_e201_c18d_9334),
	(0x3856_7cda_d827_aacf, 0xfa30_9c33_b717_dd13, 0xc2db_83d1_400e_7d58),
];

const GF128_VECTORS: [([u64; 2], [u64; 2], [u64; 2]); 10] = [
	(
		[0xb1d2_219b_0266_de02, 0x4556_f8aa_c66f_427f],
		[0xfc9d_e0af_7ec4_0b3f, 0x3ddd_bcee_3039_f5fc],
		[0xf0b6_3cd2_d8d9_acb7, 0x14c9_965c_bb45_f242],
	),
	(
		[0x7218_e0e2_8cba_2bad, 0xc63a_3ae2_7b18_6b00],
		[0x6cbf_9a22_2a7f_80a7, 0xbfe1_ca4a_7ccb_135f],
		[0x9a68_dc27_6e08_964a, 0x94cf_56a8_1986_e62f],
	),
	(
		[0xfa30_9c33_b717_dd13, 0x3856_7cda_d827_aacf],
		[0x8418_b817_f5ca_f84c, 0x3590_e0c9_4d76_b16a],
		[0x0d4a_f0a0_c777_8f42, 0xa52c_df9b_4232_6edc],
	),
	(
		[0xf790_3a9c_58e4_223c, 0x0cdc_30af_062b_a589],
		[0x4193_e34b_8241_b8b6, 0x8d73_a6d5_8a98_33ad],
		[0x1aeb_bb2a_40e6_bdc5, 0x40b5_8b16_63f1_e7ba],
	),
	(
		[0x81f5_9dad_f351_6810, 0x657e_2860_88c9_6142],
		[0x1235_6e70_b09e_27a6, 0x56aa_8637_3c49_8fdd],
		[0x6f19_31b5_b32a_dfd6, 0x3d07_21c2_dd98_8b1d],
	),
	(
		[0x0fe9_a9f1_0ea6_b3be, 0x614b_ecf0_f698_1970],
		[0xf764_a674_4795_7a65, 0x897b_b935_61e0_4d72],
		[0x7082_df4a_e391_82f8, 0x29ea_d6ff_7a23_1a76],
	),
	(
		[0xb6f0_e7fe_834a_305f, 0x5d1b_ce48_6737_4275],
		[0xf507_be43_450e_596c, 0x7625_671a_07a1_b127],
		[0x7d87_898b_b86b_9700, 0x288b_3391_9644_a559],
	),
	(
		[0x00a7_fced_16ff_a59b, 0x7009_d6ea_6cbc_3723],
		[0xb4da_b96b_1454_919d, 0x23fa_d705_84b9_ff24],
		[0x6f67_2495_8616_3ab9, 0xbb82_3abc_9893_9fae],
	),
	(
		[0x5756_b56a_1d20_8f91, 0xac2c_97eb_cf12_1998],
		[0x633c_9cef_c089_eb74, 0x0fd7_3239_d93b_d077],
		[0xb265_8b01_6f98_c47f, 0x9dfa_6167_29b5_e040],
	),
	(
		[0xf55a_b02f_9dae_69b8, 0xc1c4_2adf_a999_b078],
		[0xfae3_08c4_06eb_08fe, 0x49bf_cd0b_d4d9_6b01],
		[0xdf0f_7f62_ecc6_10e1, 0x9bce_c94d_9f08_f412],
	),
];

const GF192_VECTORS: [([u64; 3], [u64; 3], [u64; 3]); 10] = [
	(
		[0x0cdc_30af_062b_a589, 0x8418_b817_f5ca_f84c, 0x3590_e0c9_4d76_b16a],
		[0x4193_e34b_8241_b8b6, 0x8d73_a6d5_8a98_33ad, 0xf790_3a9c_58e4_223c],
		[0xedb2_d770_42f0_7f3e, 0xc223_197d_0442_5354, 0x601e_9baa_99e6_b2fd],
	),
	(
		[0x56aa_8637_3c49_8fdd, 0x81f5_9dad_f351_6810, 0x657e_2860_88c9_6142],
		[0x0fe9_a9f1_0ea6_b3be, 0x614b_ecf0_f698_1970, 0x1235_6e70_b09e_27a6],
		[0xcf06_4247_6758_587a, 0x2ed5_78d8_f170_b814, 0x0b86_792e_bec2_4165],
	),
	(
		[0x5d1b_ce48_6737_4275, 0xf764_a674_4795_7a65, 0x897b_b935_61e0_4d72],
		[0xf507_be43_450e_596c, 0x7625_671a_07a1_b127, 0xb6f0_e7fe_834a_305f],
		[0x2d43_614d_af89_5767, 0xa0d4_3a4a_5916_7a19, 0x1d01_f449_3cf9_f6bf],
	),
	(
		[0x23fa_d705_84b9_ff24, 0x00a7_fced_16ff_a59b, 0x7009_d6ea_6cbc_3723],
		[0x5756_b56a_1d20_8f91, 0xac2c_97eb_cf12_1998, 0xb4da_b96b_1454_919d],
		[0x0b31_e0f4_e429_e2d8, 0x91b6_1a18_bdb1_8fd4, 0x35ce_63ac_64f5_8838],
	),
	(
		[0xc1c4_2adf_a999_b078, 0x633c_9cef_c089_eb74, 0x0fd7_3239_d93b_d077],
		[0xfae3_08c4_06eb_08fe, 0x49bf_cd0b_d4d9_6b01, 0xf55a_b02f_9dae_69b8],
		[0xecd1_9c6c_59d1_0ede, 0x5c08_1d84_ee58_552d, 0x598a_efe6_15b5_a49a],
	),
	(
		[0xf2e6_b129_4f40_ac62, 0x5122_88f4_b069_17d3, 0xd2c3_6d17_d828_d9b4],
		[0x2069_0107_3d26_7fa5, 0x9a27_89bf_b11c_03c4, 0x1cf0_09d2_6ee1_f80f],
		[0x68fd_98a8_545f_9688, 0x1e6f_3c0f_65f3_b25d, 0x75fb_9afd_b21f_1278],
	),
	(
		[0xc78b_2478_a98a_fb85, 0x579c_2554_4b3b_a640, 0x7766_723a_1141_eddc],
		[0x1d5e_8949_c382_96e0, 0x224a_a1e6_e025_b316, 0x84eb_9e21_8750_1666],
		[0xd333_0475_5a37_90f5, 0xd9f5_f3be_81d6_054d, 0x742c_b900_f1d5_bcf9],
	),
	(
		[0x75be_e645_ed32_bf73, 0xfaaf_7393_e729_adf5, 0xe4e8_ae96_b691_f6d2],
		[0x9465_9c82_eed4_4ed6, 0x0d6f_1491_ffab_6313, 0x0348_58f4_f1f7_b14b],
		[0x998f_56ab_e7e4_348f, 0xcafb_5a35_9d76_233d, 0x930b_fcef_e10d_3166],
	),
	(
		[0x9ded_3331_f7e2_0e08, 0xae8f_8592_1186_50df, 0x4105_e1bc_e7fd_a1a5],
		[0x2267_7e78_6437_ded8, 0xeab6_bb9e_fffe_16f2, 0xae33_3a6c_2e52_5a7e],
		[0x981a_fe97_f038_b8e7, 0x2803_fd75_9a41_f4e0, 0xf80a_c109_29fc_7e3f],
	),
	(
		[0x13ee_2aa2_bc56_bb9f, 0x4b28_b4a7_8b34_aed6, 0xc9a9_7338_7db3_4f3c],
		[0x5980_393a_96b7_e262, 0xbee9_79d0_d3e7_3491, 0x724e_fc08_72e5_55d7],
		[0xce51_79b2_9641_3b74, 0x90b9_69c3_def4_555f, 0x2de0_b46a_441b_4738],
	),
];

const GF256_VECTORS: [([u64; 4], [u64; 4], [u64; 4]); 10] = [
	(
		[0xf764_a674_4795_7a65, 0x897b_b935_61e0_4d72, 0x0fe9_a9f1_0ea6_b3be, 0x614b_ecf0_f698_1970],
		[0xf507_be43_450e_596c, 0x7625_671a_07a1_b127, 0xb6f0_e7fe_834a_305f, 0x5d1b_ce48_6737_4275],
		[0x7830_0006_56b1_47bb, 0x84ae_dc89_d9ee_f7d5, 0x2065_21a5_8a74_c76d, 0x15b4_5070_f927_2694],
	),
	(
		[0xb4da_b96b_1454_919d, 0x23fa_d705_84b9_ff24, 0x00a7_fced_16ff_a59b, 0x7009_d6ea_6cbc_3723],
		[0x633c_9cef_c089_eb74, 0x0fd7_3239_d93b_d077, 0x5756_b56a_1d20_8f91, 0xac2c_97eb_cf12_1998],
		[0xec43_3aa0_96b7_c5a3, 0xb988_c648_6912_b0ff, 0xf497_4416_b3ec_0351, 0xa0ab_d743_9b4a_90b4],
	),
	(
		[0xfae3_08c4_06eb_08fe, 0x49bf_cd0b_d4d9_6b01, 0xf55a_b02f_9dae_69b8, 0xc1c4_2adf_a999_b078],
		[0x1cf0_09d2_6ee1_f80f, 0xf2e6_b129_4f40_ac62, 0x5122_88f4_b069_17d3, 0xd2c3_6d17_d828_d9b4],
		[0xd4c9_b1f1_b603_2f4a, 0x5a44_3906_b0fd_92f4, 0x069e_f58d_a600_5ef0, 0x8114_9bf7_a2a4_e9ef],
	),
	(
		[0x579c_2554_4b3b_a640, 0x7766_723a_1141_eddc, 0x2069_0107_3d26_7fa5, 0x9a27_89bf_b11c_03c4],
		[0x1d5e_8949_c382_96e0, 0x224a_a1e6_e025_b316, 0x84eb_9e21_8750_1666, 0xc78b_2478_a98a_fb85],
		[0xc92e_d4a7_f831_b22e, 0x42d3_45a8_9b21_3da0, 0x6ca9_b140_1b32_7636, 0x81a1_d4e2_8ecb_3203],
	),
	(
		[0x0348_58f4_f1f7_b14b, 0x75be_e645_ed32_bf73, 0xfaaf_7393_e729_adf5, 0xe4e8_ae96_b691_f6d2],
		[0xae8f_8592_1186_50df, 0x4105_e1bc_e7fd_a1a5, 0x9465_9c82_eed4_4ed6, 0x0d6f_1491_ffab_6313],
		[0x3c58_c491_7b50_380a, 0x155a_26d3_e04d_c3f9, 0x0ece_08a6_53d5_d785, 0xa049_1208_d489_ad20],
	),
	(
		[0x2267_7e78_6437_ded8, 0xeab6_bb9e_fffe_16f2, 0xae33_3a6c_2e52_5a7e, 0x9ded_3331_f7e2_0e08],
		[0x724e_fc08_72e5_55d7, 0x13ee_2aa2_bc56_bb9f, 0x4b28_b4a7_8b34_aed6, 0xc9a9_7338_7db3_4f3c],
		[0x31c7_1305_0f9f_e79f, 0x91f3_1345_6407_2e28, 0xbd3b_97df_5cea_a321, 0x85ae_031d_f208_7301],
	),
	(
		[0xe103_fdd3_8559_f718, 0xbde8_30a0_3300_5e9d, 0x5980_393a_96b7_e262, 0xbee9_79d0_d3e7_3491],
		[0x24d7_9165_090b_54bb, 0x6be4_9798_55b9_f4a1, 0x3c84_f512_67ae_0f3e, 0x4976_2387_dc75_fbcf],
		[0xaf3c_148f_5a6d_62b6, 0xcb2c_aa9c_1491_eb09, 0x9d96_4ce7_c25f_9cc4, 0xf077_4bdc_5efd_321b],
	),
	(
		[0xc8d3_62a8_2d40_e33d, 0x7ebb_79ea_0539_aab6, 0xd4cb_229a_76bb_fdf8, 0xe1ed_007e_6b4d_18c4],
		[0xc5ff_4258_6ffe_84be, 0x2fa0_d632_4909_d6bc, 0xd059_de8a_3f21_6806, 0x11ce_6283_a327_c2ae],
		[0x6d8f_5131_a50a_1174, 0x3716_b1b7_b85a_a29f, 0x786f_09fc_7add_372a, 0xd9be_8994_1774_9c66],
	),
	(
		[0xa34a_5c6d_c226_9e92, 0xd492_6e0f_5173_ba59, 0xad04_af41_cefd_288c, 0xd691_0fac_0958_e021],
		[0xb8ef_e595_5913_4148, 0xe2df_550b_05c8_346b, 0x471c_6490_50d8_df10, 0x3c4d_db6e_1d7b_df2b],
		[0x31bc_0204_0d35_ef67, 0xf4df_56b7_f489_a233, 0x94a9_8345_cd1c_505e, 0x9b88_8039_9d5b_6f17],
	),
	(
		[0x0dd2_d419_a879_877e, 0xbbd7_c0e1_cb89_df45, 0xb920_792c_b175_a788, 0xfe32_8eb0_319d_0dd7],
		[0xfdd1_0984_7116_04a6, 0x449e_2950_c151_d1f4, 0x06b9_5b15_4203_8a8a, 0xbbc5_1592_da56_e2fe],
		[0x5eac_8a0d_fe58_5d7d, 0x8bb8_1c1b_e490_2348, 0xb441_d39d_9869_3d34, 0x480e_988c_351a_c9f3],
	),
];

fn element<M: Modulus, const L: usize>(limbs: [u64; L]) -> GfElement<M, L> {
	GfElement::from_limbs(&limbs).unwrap()
}

fn check_vectors<M: Modulus, const L: usize>(vectors: &[([u64; L], [u64; L], [u64; L])]) {
	for &(a, b, expected) in vectors {
		let a = element::<M, L>(a);
		let b = element::<M, L>(b);
		let expected = element::<M, L>(expected);
		assert_eq!(a * b, expected, "{a} * {b}");
		assert_eq!(b * a, expected, "{b} * {a}");
		assert_eq!((a * b).to_limbs(), expected.to_limbs());
	}
}

fn check_random_inverses<F: Field>() {
	for _ in 0..10 {
		let a = loop {
			let a = random::<F>();
			if !a.is_zero() {
				break a;
			}
		};
		let inv = a.invert().unwrap();
		assert_eq!(a * inv, F::ONE);
	}
}

fn random<F: Field>() -> F {
	F::random(rand::rng())
}

fn check_randomness<F: Field>() {
	let samples: HashSet<F> = (0..64).map(|_| random::<F>()).collect();
	// 64 draws from at least 2^32 values; a repeat is vanishingly unlikely.
	assert_eq!(samples.len(), 64);
	assert!(!samples.contains(&F::ZERO));
}

#[test]
fn test_gf32_multiplication() {
	for (a, b, expected) in GF32_VECTORS {
		assert_eq!(Gf32::new(a) * Gf32::new(b), Gf32::new(expected));
		assert_eq!(u32::from(Gf32::from(a) * Gf32::from(b)), expected);
	}
}

#[test]
fn test_gf64_multiplication() {
	for (a, b, expected) in GF64_VECTORS {
		assert_eq!(Gf64::new(a) * Gf64::new(b), Gf64::new(expected));
		assert_eq!(u64::from(Gf64::from(a) * Gf64::from(b)), expected);
	}
}

#[test]
fn test_gf128_multiplication() {
	for ([a1, a0], [b1, b0], [c1, c0]) in GF128_VECTORS {
		assert_eq!(Gf128::new(a1, a0) * Gf128::new(b1, b0), Gf128::new(c1, c0));
	}
}

#[test]
fn test_gf192_multiplication() {
	for ([a2, a1, a0], [b2, b1, b0], [c2, c1, c0]) in GF192_VECTORS {
		assert_eq!(Gf192::new(a2, a1, a0) * Gf192::new(b2, b1, b0), Gf192::new(c2, c1, c0));
	}
}

#[test]
fn test_gf256_multiplication() {
	for ([a3, a2, a1, a0], [b3, b2, b1, b0], [c3, c2, c1, c0]) in GF256_VECTORS {
		assert_eq!(
			Gf256::new(a3, a2, a1, a0) * Gf256::new(b3, b2, b1, b0),
			Gf256::new(c3, c2, c1, c0)
		);
	}
}

#[test]
fn test_vectors_through_limb_constructor() {
	check_vectors::<Gf128Modulus, 2>(&GF128_VECTORS);
	check_vectors::<Gf192Modulus, 3>(&GF192_VECTORS);
	check_vectors::<Gf256Modulus, 4>(&GF256_VECTORS);
}

#[test]
fn test_random_inverses() {
	check_random_inverses::<Gf32>();
	check_random_inverses::<Gf64>();
	check_random_inverses::<Gf128>();
	check_random_inverses::<Gf192>();
	check_random_inverses::<Gf256>();
}

#[test]
fn test_random_element_inverse() {
	for _ in 0..10 {
		let a = Gf256::random_element();
		if let Ok(inv) = a.invert() {
			assert_eq!(a * inv, Gf256::ONE);
		}
	}
}

#[test]
fn test_randomness() {
	check_randomness::<Gf32>();
	check_randomness::<Gf64>();
	check_randomness::<Gf128>();
	check_randomness::<Gf192>();
	check_randomness::<Gf256>();
}
