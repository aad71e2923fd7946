use super::galois::GaloisField;

// Reed-Solomon encoder
//------------------------------------------------------------------------------

// Product of (x - a^i) for i in 0..degree, highest degree coefficient first
pub fn generator_polynomial(gf: &GaloisField, degree: usize) -> Vec<u8> {
    (0..degree).fold(vec![1], |poly, i| multiply_polynomials(gf, &poly, &[1, gf.exp(i)]))
}

fn multiply_polynomials(gf: &GaloisField, p1: &[u8], p2: &[u8]) -> Vec<u8> {
    let mut res = vec![0; p1.len() + p2.len() - 1];
    for (i, &a) in p1.iter().enumerate() {
        for (j, &b) in p2.iter().enumerate() {
            res[i + j] ^= gf.mul(a, b);
        }
    }
    res
}

// Performs polynomial long division with data polynomial(num)
// and generator polynomial(den) to compute remainder polynomial,
// the coefficients of which are the ecc
pub fn ecc(gf: &GaloisField, data: &[u8], ecc_count: usize) -> Vec<u8> {
    let len = data.len();
    let gen_poly = generator_polynomial(gf, ecc_count);

    let mut res = data.to_vec();
    res.resize(len + ecc_count, 0);

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }

        for (u, &g) in res[i..].iter_mut().zip(gen_poly.iter()) {
            *u ^= gf.mul(g, lead_coeff);
        }
    }

    res.split_off(len)
}

#[cfg(test)]
mod ec_tests {

    use super::{ecc, generator_polynomial};
    use crate::common::ec::GF256;

    #[test]
    fn test_generator_polynomial() {
        assert_eq!(generator_polynomial(&GF256, 0), vec![1]);
        assert_eq!(generator_polynomial(&GF256, 1), vec![1, 1]);
        assert_eq!(generator_polynomial(&GF256, 2), vec![1, 3, 2]);
        assert_eq!(generator_polynomial(&GF256, 7), vec![1, 127, 122, 154, 164, 11, 68, 117]);
    }

    #[test]
    fn test_generator_polynomial_len() {
        for degree in 0..=30 {
            let poly = generator_polynomial(&GF256, degree);
            assert_eq!(poly.len(), degree + 1);
            assert_eq!(poly[0], 1);
        }
    }

    #[test]
    fn test_ecc_small() {
        let res = ecc(&GF256, &[1, 2], 2);
        assert_eq!(res, vec![1, 2]);
        assert_eq!(ecc(&GF256, &[1, 2], 2), res);
    }

    #[test]
    fn test_ecc_zero_data() {
        assert_eq!(ecc(&GF256, &[0; 9], 7), vec![0; 7]);
    }

    #[test]
    fn test_poly_mod_1() {
        let res = ecc(&GF256, b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", 10);
        assert_eq!(&*res, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_poly_mod_2() {
        let res = ecc(&GF256, b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", 13);
        assert_eq!(&*res, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10");
    }

    #[test]
    fn test_poly_mod_3() {
        let res = ecc(&GF256, b"CUF\x86W&U\xc2w2\x06\x12\x06g&", 18);
        assert_eq!(&*res, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'");
    }

    #[test]
    fn test_codeword_is_divisible() {
        // A full codeword evaluates to zero at every generator root
        let data = b"Hello World";
        let ec_len = 10;
        let mut codeword = data.to_vec();
        codeword.extend(ecc(&GF256, data, ec_len));
        for i in 0..ec_len {
            let root = GF256.exp(i);
            let eval = codeword.iter().fold(0, |acc, &c| GF256.mul(acc, root) ^ c);
            assert_eq!(eval, 0, "root a^{i}");
        }
    }
}
