//! Shared fixtures: a 4096-bit key pair generated with OpenSSL and
//! ciphertexts produced by an independent OAEP-SHA-512 implementation.

#![allow(dead_code)]

use hex_literal::hex;
use rand_core::CryptoRngCore;
use rsa4096::{
    hazmat::{bytes_to_uint, mgf1, rsa_encrypt, uint_to_be_pad},
    sha2::{Digest, Sha512},
    traits::PublicKeyParts,
    RsaPrivateKeyPair, HASH_SIZE, MAX_MESSAGE_LEN, MODULUS_SIZE,
};

pub const MODULUS: [u8; 512] = hex!(
    "a17871437600448b60dddd69c25a1ab5aa6fb0f66c48466953a9ccbfdecacf5b"
    "5edcce0d5289fc247adfb886261cc100277cf05cd898f23810b3427662bc3590"
    "8c6032171b27bd9a1a898af111dc902bbc97c4c92621b49fc1f18926f3e82ec1"
    "5f731ece4a04fc70e0749255c1b76bed1a42c04212e683c5c7fe44c58a0a8666"
    "b78c61c3d7eab09b2cfad780ebd8f43ed25eb6faef8d42d5d9c2e17a8b09adc5"
    "736241a8a527386703fcfdfde2f31740ef3c2019b8db535e52488b5a616ac6aa"
    "72aa84f49fc2e1a9329c8e25f53294323567a3c257c463ba628531a668b3041b"
    "578e75785c89b2cda06c92d4a5568cb7495aa79ae2ffc2dc2a142cf7a555ee57"
    "709c43e63bf7e739b768cefa5d8c5fbffc4d721c96a4cba4ac93d126f3b15dba"
    "af2c6e49b20510951f1fa1bee736445d14b5f3210155ae8f0f24099c6e58e902"
    "238f032a567d32b72d7bbd432c520386adf2ebaecb404c4a01c60d86a2181f97"
    "3c7fed7d0573839cffc940ed63259faf8dcbc232e93d2e2ecba008447552e3a4"
    "361aeb17e8d6ac1fb5b2de9adf0635faa69a456afb73fd4247a2706fa6d90a34"
    "0786d9ca783fffc73604047bbe69eb1fc37b92cd96d0fe0746c9cf0dd2ff6ce3"
    "9377ecd0eadbdb6fa82d83146427844ab3bd2dbb35a1295845b6a05678d66d7a"
    "6a81f92762865a4f4b12de859f37ec1e21e5057d28ccd2f002cf33200584a5ab"
);

pub const PRIVATE_EXPONENT: [u8; 512] = hex!(
    "0043742bc344e2fb473cb2e2a9f1167c71a12ae07649b0154e8ded3a91323536"
    "31253f2bd41ec929f9f464cc187f1e1fc03ea3777d32f20695818bac0cde8d74"
    "0434607c9ea0e3d8d2ed58f65faf4e8c046106b3dc117a3abb43a848b276b8f5"
    "cababff0d199aa580aaec009730b61cad10db2548615725a71f58554f69423ce"
    "b8d42e1debda26fd3ea5b61420a270f7ef468734dcd442c11a5d8ba0e6d6256d"
    "e3efeceb5b984fc8bb9b5adf8e205aec7feb7bf26377bb21a3a03297452e8fb1"
    "5e312a01e417b4326f5dddd156a7a9451b19921bd6a1ca804a67156823da645a"
    "dcde35060effee2ced5bf2467eecb79253c7a63f089c052a18c5534169049275"
    "58ec7c1d03214b5ad4b7759c2d75b3e5aefec102e5796e407834f34cb5c14010"
    "ecaa38bdc91da2ae90dec979c6d5472b2bafb164c5104ca758bcbe5f2f94b2a0"
    "c9209396f71f7c92f7d285cdc4efcff09d592a9a2cc756b68f1125268a48af0e"
    "814d1a2f3b8aee15786d4241b469e8f2f5fd393abbb17129e649c56ee2302bea"
    "dca1b2240a3904ba4b264b31664dc78376a8e038a3836d872faf30d69ded1210"
    "4ee556ba26379d2e21e5f54c65fe65675c45357cce6c72e469a3efddd6389471"
    "21968f6b389dd1bf6fc880a7fef95b8a1891b6d43881948329f9fe1e0fc6a29e"
    "d683c15ab2d6bb54040a39fe7b26f68e047d7c5abe574c613da90112d6c133bd"
);

/// First prime factor of [`MODULUS`].
pub const PRIME: [u8; 256] = hex!(
    "dc651a7c994560e53ea5cc984cabb05e8da0b46519740619d8962990594ee81b"
    "baae062febf9d6995dce9115ecc689e583ee3636821a6efe2db95fef9e13e4a9"
    "aba86b3eed2eebd8cff76d856594d6e50f4a1c5b96643d46ac70a578e146b1bb"
    "42222fe16083c24639ac7815157edfd741ded2872ab7d2a5ade9c4d87c6d11d8"
    "a56da111967873dea211af5b3b0573f4131043a5218af8b207e576f2d86ea01a"
    "896d005eaf4605593918189278e901cde02eb37928da937d677435d32086f7de"
    "fb802ebdd8f93371574ace3f874687ab8bbf61d5d7cb0f13e748075ebaaa47c5"
    "27486853b083e0b1b4d38612846cf250c7b144628ea3d35ad8a1e7187a681bd7"
);

pub const CIPHERTEXT_EMPTY: [u8; 512] = hex!(
    "0bfa2b19de6261af0d57ddc518cce8cc3dbeffdeaee6bff75d4be8af12cbc001"
    "a9e7bc83e296ed3d1a7c1476812dc8b40d90981d3489e9801d4723e8def90052"
    "6d4340d923c9a1f11121faa25ce81c683530e455792158ec73e66a4aedf99fcd"
    "c7fdff5c6868bf2bacd5c0a4fe5e25550f0741c13ca6b20c49aad29f20f487a9"
    "bc8360b25d8bf6639951f10a3a42b57ad833f596e568363dd18198e598e8be5a"
    "a895c81e96755cc6a228ff6f1dc234bbb29339667faa24556ebe240d6b03cc06"
    "0897f675ae48a12ac2558be3213260b5ea6723d7b0c021ca91b10b6c913390a2"
    "416eb8511bf15b00d2e1d0cb8054960adb8ed00137a8997643ae9c73b10ffa3c"
    "a984fdff4c0646271668f1ac6ea32a0d64c8469aff111ce9d0204188d5318172"
    "c7e9497a80acb02f508abb782ec8054e26d24bbe395db3f997ee3e2b42be8644"
    "04d06d99e3ed5720c14c90417919b5cfc6873a196e63b6769ebadfa0da8f52bc"
    "edcafdff8e70ca30a2f7f5dfdb362e2d66d20e8933c67d6147d79ed0c1d804dd"
    "1ee2f9a86b7d476d49412912eb897411acb077fd61d52b38386d4abc21f50f78"
    "680fde2bbcc4e0d16d3650ca1af3349c690adb3f9cdd93a701e1e66a38ae014d"
    "f05db5791c59aa97c6cf724b802cd62dc7da63d3f95864db1c4575c5c686cfbf"
    "d75aba5bd06a7a656925543ebcde46df3bc9676ae02bbd099c9ff7233c412c6d"
);

/// Encrypts `b"hello world"`.
pub const CIPHERTEXT_HELLO: [u8; 512] = hex!(
    "071309227479232079c11d42b029a192f02fe8d0f8a6749589b1b8bd5ace3f87"
    "deff1cf854ab2a207c1a889215232c9127dc31760a074de6dc89de010a69b499"
    "755c10a3aa3b349a19adb8de211260f460c1e778c965736ce8fb0d4b4131c659"
    "f6834459bca5a0b29a1f17e651b5d6332a18d46c81418bcbb7872988162a523b"
    "3f8069b1036ba7a652916b15a12114bfe2ec320f72414562acd245ba080716e4"
    "ede417213aa875d061d7201aa9e72b6225d2caf0f01a83e05f54ed35866875c1"
    "f9bd4466d4f4e4983b2209cb9753b56056a2067948c39a7fcbe722f9122da13c"
    "2ab97f46b5226be9e435c896359634dcf556e826f1398fa144f3e474d3484dc1"
    "c9da9a8a82d662c141c0a758514f3f7750054c1b04ec2a8d3c1181c6f4b980cb"
    "bc5c65cfedc273b475c6c39a59f875e477a76942cc0950526e47225bc37ea252"
    "ab405362f9eb6be82359eceb62a05feb68f2fd376e0e17bb4d2854cbdb73b875"
    "778dfd5a5d4cf8a1ccb3113f8d5b45217645522ea6501c29efbc65ab411410d1"
    "0ad541c5cc8d1f74b3d25671e94cdfde192b5c5fe39e1006f3ec6d3ffec8ebb1"
    "4f5e068608ce704ee65002b7ada8012bd47b7117a6f5b809883fca1b4d47eaae"
    "ea6cc2d0ca436054e9f9f017ad7e725e19063b585cda8bcfcf86d1aa7ae98294"
    "911c72723ec4c2a9a4a6b9eb2826b8622ed9bc4c3823395380ed1e58b88ff210"
);

/// Encrypts [`max_message`].
pub const CIPHERTEXT_MAX: [u8; 512] = hex!(
    "5bb7e17b511397a500c9b69492164da353f1afbbb38cd04c5670ddcd3a8d4a1f"
    "750ebfedb550ca1e56d4ea607e65af5f94c85ac690a75bdec1920fe0e4062c2f"
    "2ae65721fe00cdaedddf9300dcf33402c514cf63bd2498dbd5bd2af7021c412f"
    "419e2b2797669ad799a3769e72bc8281bd1e4ebd1eadbc954849bb17b17fda8d"
    "d93869718c7fe0ea51feb141bade665a3424e31c193f0b6b616868a6678bb325"
    "b4b2fa900d0f19960256118132f446dddf48947b72a01c4338ffb3b67070f981"
    "29dd6a4029fa4ca4354bad761c070475aa1df5b8507a67289cafd9a373d35e0a"
    "89c142895efac751dad529bb3b887cd6a11c7b400e6c93f1daf21320b8f69986"
    "1d2f3a19e667d1827f3b3afb24fa44120882f8765f713b4dfbd557f9274322fc"
    "c86148a5085b90769fb656364b2f89a37bc9a46ba17984804a33e0fb05774045"
    "5d079e573f7077f401c94a60d66191b51149725902d1fbdf7f9d1cdb4d885e18"
    "3e6cf67567312740e5e1e0ef38b48f4a47f6d03feba658feadaaec7f8346a99f"
    "bd6af350939f3dc2fc89d5008ad58abf7d2bfe6ccc02fadb4efc6ba94b1e7d1e"
    "30b30097c9e994052d6bbeb1ced4e2c4aab2751810f4c35aa98be423b0e8ec88"
    "ec8e08904d45bae3fabb53cee99e3d82a413cba8668dd39ec6df94d4a656e16b"
    "1a72952f81c82aa8846f6809eea647eee2dec1026d07bb1f22259e93a33a65bf"
);

/// The 382-byte plaintext behind [`CIPHERTEXT_MAX`].
pub fn max_message() -> Vec<u8> {
    (0..MAX_MESSAGE_LEN).map(|i| ((i * 7 + 3) % 256) as u8).collect()
}

pub fn key_pair() -> RsaPrivateKeyPair {
    RsaPrivateKeyPair::from_be_bytes(&MODULUS, &PRIVATE_EXPONENT, None).unwrap()
}

/// OAEP-SHA-512 encryption with an empty label.
///
/// WARNING: test-only; nothing in the crate encrypts.
pub fn encrypt<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    key: &impl PublicKeyParts,
    msg: &[u8],
) -> Vec<u8> {
    assert!(msg.len() <= MAX_MESSAGE_LEN);

    let mut seed = [0u8; HASH_SIZE];
    rng.fill_bytes(&mut seed);

    let db_len = MODULUS_SIZE - HASH_SIZE - 1;
    let mut db = vec![0u8; db_len];
    db[..HASH_SIZE].copy_from_slice(&Sha512::digest(b""));
    db[db_len - msg.len() - 1] = 1;
    db[db_len - msg.len()..].copy_from_slice(msg);

    for (b, m) in db.iter_mut().zip(mgf1(&seed, db_len).unwrap()) {
        *b ^= m;
    }
    for (b, m) in seed.iter_mut().zip(mgf1(&db, HASH_SIZE).unwrap()) {
        *b ^= m;
    }

    let mut em = vec![0u8];
    em.extend_from_slice(&seed);
    em.extend_from_slice(&db);

    let c = rsa_encrypt(key, &bytes_to_uint(&em));
    uint_to_be_pad(&c, MODULUS_SIZE).unwrap()
}
